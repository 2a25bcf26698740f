//! Suggested file names, optionally shaped into attack strings.

use alloc::string::String;

/// Turns a base name and extension into the final suggested file name.
pub trait NameTransform {
    fn file_name(&self, base: &str, extension: &str) -> String;
}

/// Built-in file name shapes.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilenamePattern {
    /// `base.ext`
    #[default]
    Standard,
    /// `../../../etc/passwd/base.ext`
    PathTraversal,
    /// `base.ext%00.php`
    NullByte,
    /// `base.php.ext`
    DoubleExtension,
    /// `base;sleep 10;.ext`
    ShellInjection,
    /// `<img src=x onerror=alert(1)>.ext`
    XssFilename,
    /// `base_AAAA….ext` with 200 `A`s
    LongName,
    /// `  base  .ext  `
    Whitespace,
}

impl FilenamePattern {
    /// Every pattern except [`FilenamePattern::Standard`].
    pub const HOSTILE: [FilenamePattern; 7] = [
        Self::PathTraversal,
        Self::NullByte,
        Self::DoubleExtension,
        Self::ShellInjection,
        Self::XssFilename,
        Self::LongName,
        Self::Whitespace,
    ];
}

impl NameTransform for FilenamePattern {
    fn file_name(&self, base: &str, extension: &str) -> String {
        let ext = extension.trim_start_matches('.');
        match self {
            Self::Standard => alloc::format!("{base}.{ext}"),
            Self::PathTraversal => alloc::format!("../../../etc/passwd/{base}.{ext}"),
            Self::NullByte => alloc::format!("{base}.{ext}%00.php"),
            Self::DoubleExtension => alloc::format!("{base}.php.{ext}"),
            Self::ShellInjection => alloc::format!("{base};sleep 10;.{ext}"),
            Self::XssFilename => alloc::format!("<img src=x onerror=alert(1)>.{ext}"),
            Self::LongName => alloc::format!("{base}_{}.{ext}", "A".repeat(200)),
            Self::Whitespace => alloc::format!("  {base}  .{ext}  "),
        }
    }
}
