//! Parse orchestration: directory → index → compounds → entities.
//!
//! Directory and index failures abort the parse. Everything below that is
//! isolated: a compound that cannot be read, decoded or built is recorded with
//! [`Severity::Error`], a member that cannot be built with [`Severity::Warning`],
//! and the batch moves on.

use super::dispatch::Builder;
use super::index::{CompoundRef, parse_index};
use super::result::{ParseError, ParseMetadata, ParseResult, Severity};
use super::schema::{RawDef, decode_compound};
use super::source::{self, INDEX_FILE};
use crate::config::ParseOptions;
use crate::entity::Entity;
use crate::error::{DoxygenError, Result};
use crate::types::{EntityKind, Visibility, compound_entity_kinds};
use ahash::AHashSet;
use std::path::Path;
use std::time::Instant;

/// Parses a Doxygen XML output directory into a flat entity list.
///
/// Compound documents are processed one after another in index order.
pub async fn parse(path: impl AsRef<Path>, options: &ParseOptions) -> Result<ParseResult> {
    let start = Instant::now();
    let dir = source::expand_tilde(path.as_ref());

    if let Some(timeout_ms) = options.timeout_ms {
        tracing::warn!("timeout_ms={} is reserved and not enforced while parsing", timeout_ms);
    }

    source::validate(&dir).await?;
    let documents = source::list(&dir).await?;

    let index_path = dir.join(INDEX_FILE);
    let index_text = source::read(&index_path).await?;
    let index = parse_index(&index_text, &index_path)?;

    let compounds: Vec<&CompoundRef> = index
        .compounds
        .iter()
        .filter(|compound| retains_compound(compound, options))
        .collect();

    tracing::info!(
        "Parsing {} of {} compounds from {} (Doxygen {})",
        compounds.len(),
        index.compounds.len(),
        dir.display(),
        if index.version.is_empty() { "unknown" } else { index.version.as_str() }
    );

    let mut run = ParseRun::new(options);
    for compound in &compounds {
        run.process_compound(&dir, compound).await;
    }

    let metadata = ParseMetadata {
        version: index.version.clone(),
        total_files: documents.len(),
        processed_files: compounds.len(),
        total_entities: run.entities.len(),
        elapsed_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        cache_used: false,
    };

    tracing::info!(
        "Extracted {} entities with {} recorded errors in {}ms",
        metadata.total_entities,
        run.errors.len(),
        metadata.elapsed_ms
    );

    Ok(ParseResult::new(run.entities, metadata, run.errors))
}

/// Keeps a compound when it can contribute at least one requested entity kind.
fn retains_compound(compound: &CompoundRef, options: &ParseOptions) -> bool {
    options.entity_kinds.as_ref().is_none_or(|requested| {
        compound_entity_kinds(&compound.kind)
            .iter()
            .any(|kind| requested.contains(kind))
    })
}

/// The entity kind a member definition would produce, if its kind is known.
fn member_entity_kind(kind: &str, parent: Option<&Entity>) -> Option<EntityKind> {
    match kind {
        "function" if parent.is_some_and(|p| p.kind.is_record()) => Some(EntityKind::Method),
        other => other.parse().ok(),
    }
}

/// Mutable state of one parse: accumulated entities, recorded errors and seen ids.
struct ParseRun<'a> {
    options: &'a ParseOptions,
    entities: Vec<Entity>,
    errors: Vec<ParseError>,
    seen: AHashSet<String>,
}

impl<'a> ParseRun<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            entities: Vec::new(),
            errors: Vec::new(),
            seen: AHashSet::new(),
        }
    }

    async fn process_compound(&mut self, dir: &Path, compound: &CompoundRef) {
        let file = compound.document_name();
        let doc_path = dir.join(&file);
        tracing::debug!("Processing {} compound '{}' from {}", compound.kind, compound.name, file);

        let text = match source::read(&doc_path).await {
            Ok(text) => text,
            Err(e) => {
                self.record(&file, Some(compound.refid.as_str()), &e, Severity::Error);
                return;
            }
        };

        let mut def = match decode_compound(&text) {
            Ok(def) => def,
            Err(reason) => {
                let e = DoxygenError::MalformedDocument {
                    path: doc_path,
                    reason,
                };
                self.record(&file, Some(compound.refid.as_str()), &e, Severity::Error);
                return;
            }
        };
        fill_from_index(&mut def, compound);

        let container = match Builder::for_kind(&def.kind) {
            Ok(builder) => match builder.build(&def, None) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    self.record(&file, Some(compound.refid.as_str()), &e, Severity::Error);
                    return;
                }
            },
            Err(_) => {
                tracing::trace!("No container entity for '{}' compounds", def.kind);
                None
            }
        };

        let members: Vec<Entity> = def
            .member_defs()
            .filter_map(|member| self.build_member(&file, &def.kind, member, container.as_ref()))
            .collect();

        if let Some(container) = container {
            self.include(container);
        }
        for member in members {
            self.include(member);
        }
    }

    fn build_member(
        &mut self,
        file: &str,
        compound_kind: &str,
        member: &RawDef,
        parent: Option<&Entity>,
    ) -> Option<Entity> {
        if let Some(kind) = member_entity_kind(&member.kind, parent)
            && !self.options.wants_kind(kind)
        {
            tracing::trace!(
                "Skipping {} member {:?} of {} compound",
                kind,
                member.name,
                compound_kind
            );
            return None;
        }

        match Builder::for_kind(&member.kind).and_then(|builder| builder.build(member, parent)) {
            Ok(entity) => Some(entity),
            Err(e) => {
                self.record(file, member.id.as_deref(), &e, Severity::Warning);
                None
            }
        }
    }

    /// Applies the inclusion predicate and id uniqueness, then keeps the entity.
    fn include(&mut self, entity: Entity) {
        if !self.options.wants_kind(entity.kind) {
            return;
        }
        if entity.visibility == Visibility::Private && !self.options.include_private {
            return;
        }
        if !self.seen.insert(entity.id.clone()) {
            tracing::debug!("Skipping duplicate entity id '{}'", entity.id);
            return;
        }
        self.entities.push(entity);
    }

    fn record(
        &mut self,
        file: &str,
        entity_id: Option<&str>,
        error: &DoxygenError,
        severity: Severity,
    ) {
        tracing::warn!("{:?} in {}: {}", severity, file, error);
        self.errors.push(ParseError {
            file: file.to_string(),
            entity_id: entity_id.map(str::to_string),
            message: error.to_string(),
            severity,
        });
    }
}

/// Fills fields a compound document left out from its index entry.
fn fill_from_index(def: &mut RawDef, compound: &CompoundRef) {
    if def.id.is_none() {
        def.id = Some(compound.refid.clone());
    }
    if def.kind.is_empty() {
        def.kind.clone_from(&compound.kind);
    }
    if def.compound_name.is_none() && !compound.name.is_empty() {
        def.compound_name = Some(compound.name.clone());
    }
}
