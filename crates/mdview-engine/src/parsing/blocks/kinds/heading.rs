/// ATX heading delimiters.
pub struct Heading;

impl Heading {
    /// Prefixes ordered longest first, so `###### x` is never read as `# ` plus hashes.
    const PREFIXES: [&'static str; 6] = ["###### ", "##### ", "#### ", "### ", "## ", "# "];

    /// Returns the level and trimmed text if `line` opens with 1-6 hashes and a space.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES.iter().find_map(|prefix| {
            let rest = line.strip_prefix(prefix)?;
            let level = (prefix.len() - 1) as u8;
            Some((level, rest.trim()))
        })
    }
}
