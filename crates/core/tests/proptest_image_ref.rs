use estate_core::image_ref::{
    encode_uri_component, extract_filename, resolve_image_ref, ImageSource,
};
use estate_core::types::ImageParent;
use proptest::prelude::*;

fn arb_hint() -> impl Strategy<Value = Option<ImageParent>> {
    prop_oneof![
        Just(None),
        Just(Some(ImageParent::Property)),
        Just(Some(ImageParent::Unit)),
    ]
}

proptest! {
    /// Property: anything starting with `http` is returned untouched as external
    #[test]
    fn prop_http_references_pass_through(suffix in ".*", hint in arb_hint()) {
        let reference = format!("http{suffix}");
        let resolved = resolve_image_ref(Some(&reference), hint);
        prop_assert_eq!(resolved.url, reference);
        prop_assert_eq!(resolved.source, ImageSource::External);
    }

    /// Property: raw object keys resolve to the encoded blob route
    #[test]
    fn prop_object_keys_are_encoded(suffix in ".*") {
        let reference = format!("images/{suffix}");
        let resolved = resolve_image_ref(Some(&reference), None);
        prop_assert_eq!(
            resolved.url,
            format!("/api/images/{}", encode_uri_component(&reference))
        );
        prop_assert_eq!(resolved.source, ImageSource::ObjectStorage);
    }

    /// Property: filename extraction is idempotent
    #[test]
    fn prop_filename_extraction_idempotent(reference in ".*") {
        let once = extract_filename(&reference);
        prop_assert_eq!(extract_filename(&once), once);
    }

    /// Property: resolution never panics and never returns an empty URL
    #[test]
    fn prop_resolution_is_total(reference in proptest::option::of(".*"), hint in arb_hint()) {
        let resolved = resolve_image_ref(reference.as_deref(), hint);
        prop_assert!(!resolved.url.is_empty());
    }

    /// Property: encoded components only contain the unreserved set and escapes
    #[test]
    fn prop_encoded_component_charset(input in ".*") {
        let encoded = encode_uri_component(&input);
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()%".contains(c)));
    }
}
