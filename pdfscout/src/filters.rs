use glob::Pattern;
use std::path::Path;

const PDF_SUFFIX: &str = ".pdf";

/// Checks if the file name ends with `.pdf`, ignoring case
pub fn has_pdf_suffix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(PDF_SUFFIX))
        .unwrap_or(false)
}

/// Checks if a file should be ignored based on ignore patterns
pub fn should_ignore(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }

    let normalized_path = path.to_string_lossy().replace('\\', "/");
    ignore_patterns.iter().any(|pattern| match Pattern::new(pattern) {
        Ok(p) => p.matches(&normalized_path),
        Err(_) => false,
    })
}

/// Determines if a file should be searched
pub fn should_include_file(path: &Path, ignore_patterns: &[String]) -> bool {
    has_pdf_suffix(path) && !should_ignore(path, ignore_patterns)
}
