//! Source-to-header extension mapping.
//!
//! Matching is on the final extension only and is case-sensitive:
//! `foo.C` and `foo.CPP` are not recognized.

use std::path::{Path, PathBuf};

/// Recognized C/C++ source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Cpp,
    Cxx,
    C,
}

impl SourceKind {
    /// Detect source kind from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("cpp") => Some(SourceKind::Cpp),
            Some("cxx") => Some(SourceKind::Cxx),
            Some("c") => Some(SourceKind::C),
            _ => None,
        }
    }

    /// Extension of the companion header, without the dot
    pub fn header_extension(&self) -> &'static str {
        match self {
            SourceKind::Cpp | SourceKind::Cxx => "hpp",
            SourceKind::C => "h",
        }
    }
}

/// A source file found during traversal, paired with its companion header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl SourcePath {
    /// Returns `None` when the path does not carry a recognized extension.
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let kind = SourceKind::from_path(&path)?;
        Some(Self { path, kind })
    }

    /// Same directory and base name, header extension in place of the
    /// source extension. Only the trailing extension is replaced.
    pub fn companion_path(&self) -> PathBuf {
        self.path.with_extension(self.kind.header_extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companion_path(path: &Path) -> Option<PathBuf> {
        SourcePath::new(path).map(|source| source.companion_path())
    }

    #[test]
    fn test_maps_cpp_and_cxx_to_hpp() {
        assert_eq!(
            companion_path(Path::new("src/foo.cpp")),
            Some(PathBuf::from("src/foo.hpp"))
        );
        assert_eq!(
            companion_path(Path::new("src/bar.cxx")),
            Some(PathBuf::from("src/bar.hpp"))
        );
    }

    #[test]
    fn test_maps_c_to_h() {
        assert_eq!(
            companion_path(Path::new("lib/io.c")),
            Some(PathBuf::from("lib/io.h"))
        );
    }

    #[test]
    fn test_replaces_only_trailing_extension() {
        assert_eq!(
            companion_path(Path::new("lib/x.y.c")),
            Some(PathBuf::from("lib/x.y.h"))
        );
        assert_eq!(
            companion_path(Path::new("a.cpp.cxx")),
            Some(PathBuf::from("a.cpp.hpp"))
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(companion_path(Path::new("foo.C")), None);
        assert_eq!(companion_path(Path::new("foo.CPP")), None);
        assert_eq!(companion_path(Path::new("foo.Cxx")), None);
    }

    #[test]
    fn test_ignores_other_extensions() {
        for name in ["notes.txt", "script.py", "README.md", "foo.hpp", "foo.h", "Makefile"] {
            assert_eq!(companion_path(Path::new(name)), None, "{name} should be ignored");
        }
    }

    #[test]
    fn test_suffix_only_dotfile_has_no_extension() {
        // ".c" is a hidden file with no extension, not an empty-stem source
        assert_eq!(companion_path(Path::new("dir/.c")), None);
    }

    #[test]
    fn test_kind_detection() {
        assert_eq!(SourceKind::from_path(Path::new("a.cpp")), Some(SourceKind::Cpp));
        assert_eq!(SourceKind::from_path(Path::new("a.cxx")), Some(SourceKind::Cxx));
        assert_eq!(SourceKind::from_path(Path::new("a.c")), Some(SourceKind::C));
        assert_eq!(SourceKind::C.header_extension(), "h");
        assert_eq!(SourceKind::Cxx.header_extension(), "hpp");
    }
}
