//! Declaration helpers shared by the schema modules

/// Declare a closed string enum
///
/// Each variant is bound to its wire value, which drives serde, `as_str`,
/// `Display`, `FromStr` and query encoding alike.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownVariant;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl ::tenant_runtime::QueryValue for $name {
            fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
                pairs.push((key.to_string(), self.as_str().to_string()));
            }
        }
    };
}

/// Implement [`tenant_runtime::Model`] for records whose side map is the
/// `additional_properties` field
macro_rules! impl_model {
    ($($name:ty),+ $(,)?) => {
        $(
            impl ::tenant_runtime::Model for $name {
                fn additional_properties(&self) -> &::tenant_runtime::AdditionalProperties {
                    &self.additional_properties
                }

                fn additional_properties_mut(
                    &mut self,
                ) -> &mut ::tenant_runtime::AdditionalProperties {
                    &mut self.additional_properties
                }
            }
        )+
    };
}
