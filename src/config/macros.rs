/// Configuration macros for zero-repetition config definitions
///
/// `config_struct!` defines a configuration section with its defaults in one
/// declaration. It generates:
/// - The struct with public fields
/// - The Default implementation
/// - Serde support with `#[serde(default)]`, so a TOML file only needs to
///   list the keys it overrides
///
/// # Example
/// ```ignore
/// config_struct! {
///     pub struct DisplayConfig {
///         currency_symbol: String = "$".to_string(),
///         decimals: u32 = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
