//! Closed sets of wire values (select-box enums).

/// Declare a fieldless enum whose members travel as fixed JSON strings.
///
/// Generates serde renames, `as_str`, `ALL`, `Display`, a case-insensitive
/// `FromStr`, and a `Default` pointing at the designated default member (the
/// value a form resets to).
///
/// ```
/// stockdesk_core::wire_enum! {
///     /// Paint colour.
///     Colour {
///         Red => "RED",
///         Blue => "BLUE",
///     }
///     default Red
/// }
/// assert_eq!("blue".parse::<Colour>().unwrap(), Colour::Blue);
/// assert_eq!(Colour::default().as_str(), "RED");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($wire) {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::DomainError::validation(format!(
                    "unknown {} '{}' (expected one of: {})",
                    stringify!($name),
                    s,
                    [$($wire),+].join(", ")
                )))
            }
        }
    };
}
