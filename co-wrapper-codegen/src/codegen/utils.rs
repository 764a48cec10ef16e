//! Naming helpers for code generation.

/// Convert a snake_case name to UpperCamelCase.
///
/// Examples:
/// - `bdrv_co_preadv` → `BdrvCoPreadv`
/// - `bdrv_co_pwrite_zeroes` → `BdrvCoPwriteZeroes`
///
/// Empty segments (from doubled or trailing underscores) are dropped.
pub fn snake_to_camel(name: &str) -> String {
    name.split('_')
        .filter_map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
        })
        .collect()
}
