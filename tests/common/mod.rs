//! Shared test fixtures for integration tests.
//!
//! [`TempWorkspace`] writes Doxygen XML documents into a temporary directory
//! that is removed on drop. The `widget_project` fixture lays out a small C++
//! project: class `ns::Widget` with method `draw`, namespace `ns` with free
//! function `ns::helper`, and the file `widget.h` that lists `helper` again.

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for test isolation.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Writes an `index.xml` listing `(refid, kind, name)` compounds.
    pub fn write_index(&self, compounds: &[(&str, &str, &str)]) {
        self.create_file("index.xml", &index_xml(compounds));
    }
}

/// Renders a Doxygen index document.
#[allow(dead_code)]
pub fn index_xml(compounds: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from(
        "<?xml version='1.0' encoding='UTF-8' standalone='no'?>\n<doxygenindex version=\"1.9.8\">\n",
    );
    for (refid, kind, name) in compounds {
        xml.push_str(&format!(
            "  <compound refid=\"{refid}\" kind=\"{kind}\"><name>{name}</name></compound>\n"
        ));
    }
    xml.push_str("</doxygenindex>\n");
    xml
}

#[allow(dead_code)]
pub const WIDGET_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8">
  <compounddef id="classns_1_1Widget" kind="class" language="C++" prot="public">
    <compoundname>ns::Widget</compoundname>
    <basecompoundref refid="classns_1_1Base" prot="public" virt="non-virtual">ns::Base</basecompoundref>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classns_1_1Widget_draw" prot="public" static="no" const="yes" inline="no" virt="virtual">
        <type>void</type>
        <name>draw</name>
        <param><type>int</type><declname>x</declname><defval>0</defval></param>
        <briefdescription><para>Renders the contents.</para></briefdescription>
        <detaileddescription/>
        <location file="widget.h" line="14"/>
      </memberdef>
    </sectiondef>
    <sectiondef kind="private-func">
      <memberdef kind="function" id="classns_1_1Widget_secret" prot="private" static="no" const="no" inline="no" virt="non-virtual">
        <type>int</type>
        <name>secret</name>
        <location file="widget.h" line="18"/>
      </memberdef>
      <memberdef kind="friend" id="classns_1_1Widget_pal" prot="private" static="no" const="no" inline="no" virt="non-virtual">
        <type>friend class</type>
        <name>Pal</name>
        <location file="widget.h" line="19"/>
      </memberdef>
    </sectiondef>
    <sectiondef kind="private-attrib">
      <memberdef kind="variable" id="classns_1_1Widget_width" prot="private" static="no" mutable="no">
        <type>int</type>
        <name>width</name>
        <location file="widget.h" line="20"/>
      </memberdef>
    </sectiondef>
    <briefdescription><para>A drawable widget.</para></briefdescription>
    <detaileddescription/>
    <location file="widget.h" line="10"/>
  </compounddef>
</doxygen>
"#;

#[allow(dead_code)]
pub const NAMESPACE_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8">
  <compounddef id="namespacens" kind="namespace" language="C++">
    <compoundname>ns</compoundname>
    <innerclass refid="classns_1_1Widget" prot="public">ns::Widget</innerclass>
    <sectiondef kind="func">
      <memberdef kind="function" id="namespacens_helper" prot="public" static="no" const="no" inline="no" virt="non-virtual">
        <type>int</type>
        <name>helper</name>
        <qualifiedname>ns::helper</qualifiedname>
        <briefdescription><para>Helps.</para></briefdescription>
        <location file="widget.h" line="30"/>
      </memberdef>
    </sectiondef>
    <sectiondef kind="enum">
      <memberdef kind="enum" id="namespacens_color" prot="public" static="no" strong="yes">
        <type>unsigned int</type>
        <name>Color</name>
        <qualifiedname>ns::Color</qualifiedname>
        <enumvalue id="namespacens_color_red" prot="public">
          <name>Red</name>
          <initializer>= 0xFF0000</initializer>
        </enumvalue>
        <enumvalue id="namespacens_color_other" prot="public">
          <name>Other</name>
        </enumvalue>
        <location file="widget.h" line="34"/>
      </memberdef>
    </sectiondef>
    <briefdescription/>
    <detaileddescription/>
    <location file="widget.h" line="5"/>
  </compounddef>
</doxygen>
"#;

#[allow(dead_code)]
pub const FILE_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8">
  <compounddef id="widget_8h" kind="file" language="C++">
    <compoundname>widget.h</compoundname>
    <innernamespace refid="namespacens">ns</innernamespace>
    <sectiondef kind="func">
      <memberdef kind="function" id="namespacens_helper" prot="public" static="no" const="no" inline="no" virt="non-virtual">
        <type>int</type>
        <name>helper</name>
        <qualifiedname>ns::helper</qualifiedname>
        <location file="widget.h" line="30"/>
      </memberdef>
    </sectiondef>
    <location file="widget.h"/>
  </compounddef>
</doxygen>
"#;

/// Index entries of the widget project, in index order.
#[allow(dead_code)]
pub const WIDGET_COMPOUNDS: &[(&str, &str, &str)] = &[
    ("classns_1_1Widget", "class", "ns::Widget"),
    ("namespacens", "namespace", "ns"),
    ("widget_8h", "file", "widget.h"),
];

/// Writes the widget project into a fresh workspace.
#[fixture]
pub fn widget_project() -> TempWorkspace {
    let workspace = TempWorkspace::new();
    workspace.write_index(WIDGET_COMPOUNDS);
    workspace.create_file("classns_1_1Widget.xml", WIDGET_XML);
    workspace.create_file("namespacens.xml", NAMESPACE_XML);
    workspace.create_file("widget_8h.xml", FILE_XML);
    workspace
}
