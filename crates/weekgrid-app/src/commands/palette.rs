//! `weekgrid palette`: show which palette row each subject code lands on.

use std::io::Write;

use weekgrid_common::Result;
use weekgrid_config::WeekgridConfig;
use weekgrid_layout::Palette;

pub(super) fn run(codes: &[String], config: &WeekgridConfig) -> Result<()> {
    let palette = super::palette_from(config)?;
    let mut stdout = std::io::stdout().lock();
    for line in lines(codes, &palette) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// `code<TAB>name<TAB>background<TAB>border` per code, in input order.
pub(super) fn lines(codes: &[String], palette: &Palette) -> Vec<String> {
    codes
        .iter()
        .map(|code| {
            let entry = palette.entry_for(code);
            format!(
                "{code}\t{}\t{}\t{}",
                entry.name, entry.background, entry.border
            )
        })
        .collect()
}
