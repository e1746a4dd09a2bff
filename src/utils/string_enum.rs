/// Declares a closed set of string literals mirroring one of the Billingo schema enums.
///
/// Every generated enum carries an extra `Unknown(String)` variant. Deserialization
/// keeps values outside the declared set verbatim in it, since the remote schema may
/// grow before this crate does. Serializing an `Unknown` value that is not one of the
/// declared literals fails, so an invalid value never reaches the wire. Parsing a
/// caller-supplied string with [`FromStr`](std::str::FromStr) only accepts declared
/// literals.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $literal:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value returned by the server that is not part of the known set.
            Unknown(String),
        }

        impl $name {
            const ALLOWABLE_VALUES: &'static [&'static str] = &[$($literal),+];

            /// Every literal the API schema allows for this enum.
            #[must_use]
            pub fn allowable_values() -> &'static [&'static str] {
                Self::ALLOWABLE_VALUES
            }

            /// The wire representation of the value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $literal,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Returns false for values preserved from a server response that this
            /// release does not know about.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }

            fn from_known(value: &str) -> Option<Self> {
                match value {
                    $($literal => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_known(value).ok_or_else(|| $crate::error::Error::InvalidEnumValue {
                    enum_name: stringify!($name),
                    value: value.to_string(),
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    Self::Unknown(value) if Self::from_known(value).is_none() => {
                        Err(<S::Error as ::serde::ser::Error>::custom(format!(
                            "`{value}` is not a valid {} value, expected one of {:?}",
                            stringify!($name),
                            Self::ALLOWABLE_VALUES,
                        )))
                    }
                    value => serializer.serialize_str(value.as_str()),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_known(&value).unwrap_or(Self::Unknown(value)))
            }
        }
    };
}
