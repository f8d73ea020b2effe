//! Filename and extension based sensitivity classification

/// Keyword rules, checked in order against the lowercased filename.
/// The first keyword contained in the name decides the category.
pub const KEYWORD_RULES: &[(&str, &str)] = &[
    ("password", "Passwords"),
    ("login", "Login credentials"),
    ("ssh", "SSH Keys"),
    ("idcard", "Personal Identification"),
    ("passport", "Personal Identification"),
    ("backup", "Backup Files"),
    ("certificate", "Certificates and Keys"),
    ("pentest", "Pentest Reports"),
    ("email", "Email Data"),
    ("confidential", "Confidential Documents"),
];

/// Extension rules, only consulted when no keyword matched.
pub const EXTENSION_RULES: &[(&str, &str)] = &[
    (".kdbx", "Password Manager Files"),
    (".msg", "Email Files"),
    (".pdf", "Documents"),
    (".docx", "Documents"),
    (".xlsx", "Excel Files"),
];

/// Category for files matching neither tier
pub const DEFAULT_CATEGORY: &str = "Other Files";

/// Classify a file by its name and extension
///
/// # Arguments
/// * `filename` - Base name of the file, including extension
/// * `extension` - Extension with leading dot, or `"N/A"`
///
/// # Returns
/// Human readable category explaining why the file may be sensitive
pub fn classify(filename: &str, extension: &str) -> &'static str {
    let name = filename.to_lowercase();
    if let Some((_, category)) = KEYWORD_RULES
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
    {
        return *category;
    }

    EXTENSION_RULES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(classify("MyPassWords.txt", ".txt"), "Passwords");
        assert_eq!(classify("old_PASSWORD", "N/A"), "Passwords");
        assert_eq!(classify("id_ssh_rsa", "N/A"), "SSH Keys");
    }

    #[test]
    fn test_keyword_wins_over_extension() {
        assert_eq!(classify("password.pdf", ".pdf"), "Passwords");
        assert_eq!(classify("backup.kdbx", ".kdbx"), "Backup Files");
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        // "login" precedes "backup" in the table even though "backup" comes first in the name
        assert_eq!(classify("backup_login.txt", ".txt"), "Login credentials");
        assert_eq!(classify("email_password.csv", ".csv"), "Passwords");
        assert_eq!(classify("confidential_pentest.docx", ".docx"), "Pentest Reports");
    }

    #[test]
    fn test_extension_tier() {
        assert_eq!(classify("vault.kdbx", ".kdbx"), "Password Manager Files");
        assert_eq!(classify("note.msg", ".msg"), "Email Files");
        assert_eq!(classify("report.pdf", ".pdf"), "Documents");
        assert_eq!(classify("letter.docx", ".docx"), "Documents");
        assert_eq!(classify("report.xlsx", ".xlsx"), "Excel Files");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(classify("REPORT.PDF", ".PDF"), "Documents");
        assert_eq!(classify("report.pdf", ".pdf"), "Documents");
        assert_eq!(classify("Budget.XlSx", ".XlSx"), "Excel Files");
    }

    #[test]
    fn test_default_category() {
        assert_eq!(classify("README", "N/A"), DEFAULT_CATEGORY);
        assert_eq!(classify("main.rs", ".rs"), "Other Files");
        // extension must match exactly, not as a prefix
        assert_eq!(classify("archive.pdfx", ".pdfx"), "Other Files");
    }

    #[test]
    fn test_every_keyword_maps_to_its_category() {
        for (keyword, category) in KEYWORD_RULES {
            let name = format!("prefix_{}_suffix.bin", keyword.to_uppercase());
            assert_eq!(classify(&name, ".bin"), *category, "keyword {keyword}");
        }
    }
}
