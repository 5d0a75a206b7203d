pub const SOURCE_URL: &str =
    "https://en.wikipedia.org/wiki/Casualties_of_the_Russo-Ukrainian_War?oldformat=true";

/// Heading that opens the "Total casualties" section of the source page.
pub const SECTION_ANCHOR: &str =
    r#"<span class="mw-headline" id="Total_casualties">Total casualties</span>"#;

/// First paragraph after the anchor closes the search window.
pub const PARAGRAPH_MARKER: &str = "<p>";

pub const TABLE_SIGNATURE_PATTERN: &str = r"<table[^>]*>\s*(?:<caption[^>]*>(?:[^<]|<[^/t]|</[^c]|</c[^a])*</caption>\s*)?(?:<tbody[^>]*>\s*)?(?:<tr[^>]*>\s*)?<th[^>]*>[^<]*Breakdown[^<]*</th>\s*<th[^>]*>[^<]*Casualties.*</table>";

pub const CITATION_PATTERN: &str = r"\[.*?\]";

pub const TIME_SPAN_PATTERN: &str = r"([0-9]+ [A-Za-z]+) .* ([0-9]+ [A-Za-z]+)";

pub const DEFAULT_USERNAME: &str = "local-user";

pub const QUIT_COMMANDS: &[&str] = &["quit", "exit", "q"];
