//! Newtype IDs for type-safe entity references.
//!
//! The commerce API identifies everything by opaque strings ("prod_...",
//! "item_...", "cart_..."). Use the `define_id!` macro to create type-safe
//! wrappers that prevent accidentally passing a product ID where a line item
//! ID is expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use driftwood_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new("user_1");
/// let order_id = OrderId::new("order_1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID, returning the underlying `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(MerchantId);
define_id!(ProductId);
define_id!(CartId);
define_id!(LineItemId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_types() {
        let product = ProductId::new("prod_abc");
        let line_item = LineItemId::new("item_1");

        assert_eq!(product.as_str(), "prod_abc");
        assert_eq!(line_item.as_str(), "item_1");
    }

    #[test]
    fn test_display_matches_inner() {
        let cart = CartId::new("cart_2ylUmwOkIpxzv0");
        assert_eq!(cart.to_string(), "cart_2ylUmwOkIpxzv0");
    }

    #[test]
    fn test_serde_transparent() {
        let id: ProductId = serde_json::from_str("\"prod_abc\"").unwrap();
        assert_eq!(id, ProductId::new("prod_abc"));

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"prod_abc\"");
    }

    #[test]
    fn test_from_conversions() {
        let a = MerchantId::from("merch_1");
        let b = MerchantId::from("merch_1".to_string());
        assert_eq!(a, b);

        let back: String = a.into_inner();
        assert_eq!(back, "merch_1");
    }
}
