//! Serde utility helpers for case-insensitive deserialization

/// Macro to implement case-insensitive deserialization for fieldless enums
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     MyEnum,
///     Variant1 => "variant1",
///     Variant2 => "variant2"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    enum Visibility {
        Public,
        Internal,
        ProtectedInternal,
    }

    impl_case_insensitive_deserialize!(
        Visibility,
        Public => "public",
        Internal => "internal",
        ProtectedInternal => "protectedinternal"
    );

    #[test]
    fn test_case_insensitive_deserialize() {
        let result: Visibility = serde_json::from_str(r#""public""#).unwrap();
        assert_eq!(result, Visibility::Public);

        let result: Visibility = serde_json::from_str(r#""INTERNAL""#).unwrap();
        assert_eq!(result, Visibility::Internal);

        let result: Visibility = serde_json::from_str(r#""ProtectedInternal""#).unwrap();
        assert_eq!(result, Visibility::ProtectedInternal);

        let result: Result<Visibility, _> = serde_json::from_str(r#""private""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant 'private'"));
        assert!(err.contains("expected one of: public, internal, protectedinternal"));
    }
}
