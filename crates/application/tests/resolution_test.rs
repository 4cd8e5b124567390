use realip_application::RemoteAddressService;
use realip_domain::TrustedProxies;
use std::sync::Arc;

fn service(spec: &str) -> RemoteAddressService {
    RemoteAddressService::new(Arc::new(TrustedProxies::from_spec(spec).unwrap()))
}

#[test]
fn test_chain_walk_across_multiple_header_values() {
    let svc = service("10.0.0.0/8");

    // Pops 10.7.8.9 (trusted), 10.4.5.6 (trusted), 5.6.7.8 (untrusted: stop)
    let resolved = svc.resolve(
        "10.1.2.3:1234",
        ["1.2.3.4, 5.6.7.8, 10.4.5.6", "10.7.8.9"],
    );
    assert_eq!(resolved, "5.6.7.8");
}

#[test]
fn test_single_forwarded_client() {
    let svc = service("10.0.0.0/8");
    assert_eq!(svc.resolve("10.1.2.3:1234", ["1.2.3.4"]), "1.2.3.4");
}

#[test]
fn test_no_forwarding_header_returns_proxy_address() {
    let svc = service("10.0.0.0/8");
    assert_eq!(svc.resolve("10.1.2.3:1234", []), "10.1.2.3");
}

#[test]
fn test_empty_trust_set_always_returns_connection_host() {
    let svc = service("");

    assert_eq!(
        svc.resolve("10.1.2.3:1234", ["1.2.3.4, 5.6.7.8"]),
        "10.1.2.3"
    );
    assert_eq!(svc.resolve("[2001:db8::1]:443", ["1.2.3.4"]), "2001:db8::1");
}

#[test]
fn test_malformed_tokens_act_as_untrusted() {
    let svc = service("10.0.0.0/8");

    // "garbage" is never inside a trusted range, so it ends the walk and is
    // returned as-is; no error is raised for cosmetic input problems.
    assert_eq!(
        svc.resolve("10.1.2.3:1234", ["1.2.3.4, garbage, 10.4.5.6"]),
        "garbage"
    );
}

#[test]
fn test_whitespace_and_empty_tokens_are_skipped() {
    let svc = service("10.0.0.0/8");
    assert_eq!(
        svc.resolve("10.1.2.3:1234", ["  1.2.3.4 ,, 10.4.5.6 , ", ""]),
        "1.2.3.4"
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let svc = service("10.0.0.0/8, 172.16.0.0/12");
    let headers = ["1.2.3.4, 172.16.9.9", "10.7.8.9"];

    let first = svc.resolve("10.1.2.3:1234", headers);
    for _ in 0..10 {
        assert_eq!(svc.resolve("10.1.2.3:1234", headers), first);
    }
}
