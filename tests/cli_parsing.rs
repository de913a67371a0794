//! Tests for CLI argument parsing and dispatch.

use clap::Parser;
use httptest::{matchers::*, responders::*, Expectation, Server};
use viewdns::cli::{run, Cli, Command};
use viewdns::LogLevel;

#[test]
fn test_cli_dns_record_parsing() {
    let args = [
        "viewdns",
        "--api-key",
        "k",
        "dns-record",
        "example.com",
        "--record-type",
        "MX",
    ];
    let cli = Cli::try_parse_from(args).expect("Should parse dns-record command");

    match cli.command {
        Command::DnsRecord {
            domain,
            record_type,
        } => {
            assert_eq!(domain, "example.com");
            assert_eq!(record_type, "MX");
        }
        other => panic!("Expected DnsRecord, got {:?}", other),
    }
}

#[test]
fn test_cli_dns_record_default_record_type() {
    let cli = Cli::try_parse_from(["viewdns", "--api-key", "k", "dns-record", "example.com"])
        .expect("Should parse dns-record command");
    match cli.command {
        Command::DnsRecord { record_type, .. } => assert_eq!(record_type, "A"),
        other => panic!("Expected DnsRecord, got {:?}", other),
    }
}

#[test]
fn test_cli_reverse_ip_parsing() {
    let cli = Cli::try_parse_from(["viewdns", "--api-key", "k", "reverse-ip", "8.8.8.8"])
        .expect("Should parse reverse-ip command");
    match cli.command {
        Command::ReverseIp { host } => assert_eq!(host, "8.8.8.8"),
        other => panic!("Expected ReverseIp, got {:?}", other),
    }
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["viewdns", "version"]).expect("Should parse version command");
    assert_eq!(cli.output, "json");
    assert_eq!(cli.base_url, "https://api.viewdns.info");
    assert_eq!(cli.timeout_seconds, 30);
    // LogLevel doesn't implement PartialEq, so compare via conversion
    assert_eq!(
        log::LevelFilter::from(cli.log_level.clone()),
        log::LevelFilter::from(LogLevel::Warn)
    );
}

#[test]
fn test_cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["viewdns", "--api-key", "k"]).is_err());
}

#[test]
fn test_cli_requires_lookup_target() {
    assert!(Cli::try_parse_from(["viewdns", "--api-key", "k", "dns-record"]).is_err());
    assert!(Cli::try_parse_from(["viewdns", "--api-key", "k", "reverse-ip"]).is_err());
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    assert!(Cli::try_parse_from(["viewdns", "--log-level", "loud", "version"]).is_err());
}

#[test]
fn test_run_reverse_ip_against_test_server() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/reverseip/"),
            request::query("host=example.com&apikey=cli-key&output=json"),
        ])
        .respond_with(status_code(200).body("{\"response\":{}}")),
    );

    let base_url = server.url_str("");
    let cli = Cli::try_parse_from([
        "viewdns",
        "--api-key",
        "cli-key",
        "--base-url",
        base_url.as_str(),
        "reverse-ip",
        "example.com",
    ])
    .expect("Should parse reverse-ip command");

    assert_eq!(run(&cli).unwrap(), b"{\"response\":{}}");
}

#[test]
fn test_run_dns_record_against_test_server() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/dnsrecord/"),
            request::query("domain=example.com&recordtype=TXT&apikey=cli-key&output=xml"),
        ])
        .respond_with(status_code(200).body("<records/>")),
    );

    let base_url = server.url_str("");
    let cli = Cli::try_parse_from([
        "viewdns",
        "--api-key",
        "cli-key",
        "--output",
        "xml",
        "--base-url",
        base_url.as_str(),
        "dns-record",
        "example.com",
        "--record-type",
        "TXT",
    ])
    .expect("Should parse dns-record command");

    assert_eq!(run(&cli).unwrap(), b"<records/>");
}
