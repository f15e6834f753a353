//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# weekgrid configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[grid]
# Visible hour window. Columns are anchored at start_hour; sessions that
# start before it are pushed off the left edge and dropped.
# start_hour = 8         # 0-23
# end_hour = 18          # 1-24, must be after start_hour

[output]
# pretty = false         # pretty-print JSON layout reports

[logging]
# level = "info"         # debug, info, warning, error

# Subject color palette. Subject codes hash onto these rows in order, so
# reordering or resizing the table reassigns colors. Uncomment and edit to
# replace the built-in table.
#
# [[palette.entries]]
# name = "pink"
# background = "#FDD8EE"
# border = "#C7117F"
#
# [[palette.entries]]
# name = "yellow"
# background = "#FFF2C4"
# border = "#EB9C03"
"##
    .to_string()
}
