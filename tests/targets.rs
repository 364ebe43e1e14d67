//! Target parsing and redirect Location handling.

use webprobe::error::Error;
use webprobe::Target;

#[test]
fn bare_hostname_defaults_to_https_root() {
    let target = Target::parse("example.com").unwrap();
    assert_eq!(target.host, "example.com");
    assert_eq!(target.port, 443);
    assert_eq!(target.path, "/");
    assert!(target.tls);
}

#[test]
fn http_url_with_path() {
    let target = Target::parse("http://example.com/a/b").unwrap();
    assert_eq!(target.host, "example.com");
    assert_eq!(target.port, 80);
    assert_eq!(target.path, "/a/b");
    assert!(!target.tls);
}

#[test]
fn https_url_and_explicit_port() {
    let target = Target::parse("https://example.com").unwrap();
    assert_eq!((target.port, target.path.as_str()), (443, "/"));
    assert!(target.tls);

    let target = Target::parse("http://example.com:8080/x").unwrap();
    assert_eq!(target.port, 8080);
}

#[test]
fn rejects_non_hostname_input() {
    assert!(matches!(
        Target::parse("not a host"),
        Err(Error::InvalidTarget(_))
    ));
    assert!(matches!(
        Target::parse("localhost"),
        Err(Error::InvalidTarget(_))
    ));
    assert!(matches!(
        Target::parse("ftp://example.com"),
        Err(Error::InvalidTarget(_))
    ));
}

#[test]
fn absolute_redirect_replaces_host_and_path() {
    let current = Target::parse("start.example").unwrap();
    let next = current.redirected("https://example.com/new").unwrap();
    assert_eq!(next.host, "example.com");
    assert_eq!(next.path, "/new");
    assert_eq!(next.port, 443);
    assert!(next.tls);
}

#[test]
fn redirect_to_http_scheme_downgrades_transport() {
    let current = Target::parse("start.example").unwrap();
    let next = current
        .redirected("http://plain.example:8080/moved")
        .unwrap();
    assert!(!next.tls);
    assert_eq!(next.port, 8080);
}

#[test]
fn relative_redirect_keeps_host() {
    let current = Target::parse("https://example.com/old").unwrap();
    let next = current.redirected("/new").unwrap();
    assert_eq!(next.host, "example.com");
    assert_eq!(next.path, "/new");
    assert!(next.tls);
}

#[test]
fn empty_redirect_path_becomes_root() {
    let current = Target::parse("https://example.com/old").unwrap();
    let next = current.redirected("").unwrap();
    assert_eq!(next.path, "/");
    assert_eq!(next.host, "example.com");
}

#[test]
fn unsupported_redirect_scheme_is_an_error() {
    let current = Target::parse("example.com").unwrap();
    assert!(matches!(
        current.redirected("mailto:owner@example.com"),
        Err(Error::InvalidRedirectUrl(_))
    ));
}
