mod common;

use common::rule;
use statusmatch_core::{ResolveError, RuleSet, resolve};

fn sample() -> RuleSet<String> {
    RuleSet::try_from_rules([
        rule("A", &["200-300"]),
        rule("B", &["404"]),
        rule("C", &["*"]),
    ])
    .unwrap()
}

#[test]
fn test_picks_most_specific_rule() {
    let rules = sample();
    assert_eq!(resolve(&rules, 404).unwrap().target().as_str(), "B");
    assert_eq!(resolve(&rules, 250).unwrap().target().as_str(), "A");
    assert_eq!(resolve(&rules, 500).unwrap().target().as_str(), "C");
}

#[test]
fn test_unconfigured_status() {
    let rules = RuleSet::try_from_rules([rule("A", &["200-300"]), rule("B", &["404"])]).unwrap();
    assert_eq!(
        resolve(&rules, 999).unwrap_err(),
        ResolveError::NotConfigured { status: 999 }
    );
    assert_eq!(
        RuleSet::<String>::new().resolve(200).unwrap_err(),
        ResolveError::NotConfigured { status: 200 }
    );
}

#[test]
fn test_insertion_order_does_not_matter() {
    let forward = sample();
    let backward =
        RuleSet::try_from_rules([rule("C", &["*"]), rule("B", &["404"]), rule("A", &["200-300"])])
            .unwrap();
    for code in [100, 200, 250, 300, 404, 405, 500, 999] {
        let a = forward.resolve(code).unwrap().target().clone();
        let b = backward.resolve(code).unwrap().target().clone();
        assert_eq!(a, b, "status {code}");
        // repeated calls are stable
        assert_eq!(forward.resolve(code).unwrap().target(), &a);
    }
}

#[test]
fn test_rule_uses_its_narrowest_matching_range() {
    let rules =
        RuleSet::try_from_rules([rule("NotFoundOrAny", &["404", "*"]), rule("Client", &["4XX"])])
            .unwrap();
    assert_eq!(rules.resolve(404).unwrap().target().as_str(), "NotFoundOrAny");
    assert_eq!(rules.resolve(450).unwrap().target().as_str(), "Client");
    assert_eq!(rules.resolve(200).unwrap().target().as_str(), "NotFoundOrAny");
}

#[test]
fn test_half_open_ranges() {
    let rules = RuleSet::try_from_rules([
        rule("Informational", &["*-199"]),
        rule("Errors", &["400-*"]),
        rule("Teapot", &["418"]),
    ])
    .unwrap();
    assert_eq!(rules.resolve(100).unwrap().target().as_str(), "Informational");
    assert_eq!(rules.resolve(418).unwrap().target().as_str(), "Teapot");
    assert_eq!(rules.resolve(599).unwrap().target().as_str(), "Errors");
    assert!(matches!(
        rules.resolve(200),
        Err(ResolveError::NotConfigured { status: 200 })
    ));
}

#[test]
fn test_resolved_rule_decodes_body() {
    let rules = sample();
    let decoded = rules.resolve(404).unwrap().decode(b"missing").unwrap();
    assert_eq!(decoded, "B:missing");
}
