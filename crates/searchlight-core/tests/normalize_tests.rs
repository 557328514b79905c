use proptest::prelude::*;
use rstest::rstest;
use searchlight_core::normalize;

#[rstest]
#[case("https://example.com/blog/post/", "/blog/post")]
#[case("https://example.com/blog/post", "/blog/post")]
#[case("https://example.com/pricing?utm_source=x#plans", "/pricing")]
#[case("https://example.com/", "/")]
#[case("https://example.com", "/")]
#[case("/", "/")]
#[case("", "/")]
#[case("/docs/", "/docs")]
#[case("docs", "/docs")]
#[case("/a//", "/a")]
fn test_normalize_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn test_gsc_url_and_ga4_path_share_a_key() {
    assert_eq!(
        normalize("https://example.com/pricing/"),
        normalize("/pricing")
    );
}

prop_compose! {
    fn arb_path()(
        segments in proptest::collection::vec("[a-z0-9-]{1,8}", 0..5),
        trailing in any::<bool>(),
        absolute in any::<bool>()
    ) -> String {
        let mut path = segments.join("/");
        if absolute {
            path = format!("https://example.com/{}", path);
        }
        if trailing {
            path.push('/');
        }
        path
    }
}

proptest! {
    #[test]
    fn test_normalize_is_idempotent(path in arb_path()) {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn test_normalized_paths_are_rooted(path in arb_path()) {
        let key = normalize(&path);
        prop_assert!(key.starts_with('/'));
        prop_assert!(key == "/" || !key.ends_with('/'));
    }
}
