use dnsrpc_application::services::ResponseSynthesizer;
use dnsrpc_domain::{
    Command, CommandFamily, HandlerResult, RecordData, RecordType, ResponseOutcome,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

fn name() -> Arc<str> {
    Arc::from("test.")
}

#[test]
fn test_compatibility_matrix() {
    use RecordType::{A, AAAA, TXT};
    let rows = [
        (CommandFamily::Cidr, [false, false, true]),
        (CommandFamily::CidrMask, [true, false, false]),
        (CommandFamily::Time, [true, false, true]),
        (CommandFamily::PublicIp, [true, true, true]),
        (CommandFamily::ClientIp, [true, true, true]),
        (CommandFamily::Base64, [false, false, true]),
        (CommandFamily::Unknown, [false, false, false]),
    ];

    for (family, expected) in rows {
        for (record_type, supported) in [A, AAAA, TXT].into_iter().zip(expected) {
            assert_eq!(
                ResponseSynthesizer::supports(family, record_type),
                supported,
                "{} / {}",
                family.as_str(),
                record_type
            );
        }
    }
}

#[test]
fn test_unknown_is_nxdomain() {
    let synthesizer = ResponseSynthesizer::new(0);
    let answer = synthesizer.synthesize(
        &name(),
        &Command::Unknown,
        RecordType::TXT,
        HandlerResult::Text("ignored".into()),
    );
    assert_eq!(answer.outcome, ResponseOutcome::NxDomain);
    assert!(answer.records.is_empty());
}

#[test]
fn test_unsupported_type_is_nodata() {
    let synthesizer = ResponseSynthesizer::new(0);
    let answer = synthesizer.synthesize(
        &name(),
        &Command::Cidr { prefix: 24 },
        RecordType::A,
        HandlerResult::Count(254),
    );
    assert_eq!(answer.outcome, ResponseOutcome::NoData);
}

#[test]
fn test_handler_error_is_nodata() {
    let synthesizer = ResponseSynthesizer::new(0);
    let answer = synthesizer.synthesize(
        &name(),
        &Command::Base64Decode {
            data: "!!".into(),
        },
        RecordType::TXT,
        HandlerResult::error("invalid base64"),
    );
    assert_eq!(answer.outcome, ResponseOutcome::NoData);
    assert!(answer.records.is_empty());
}

#[test]
fn test_count_becomes_txt_with_configured_ttl() {
    let synthesizer = ResponseSynthesizer::new(30);
    let answer = synthesizer.synthesize(
        &name(),
        &Command::Cidr { prefix: 24 },
        RecordType::TXT,
        HandlerResult::Count(254),
    );
    assert_eq!(answer.outcome, ResponseOutcome::NoError);
    assert_eq!(answer.records.len(), 1);
    assert_eq!(answer.records[0].ttl, 30);
    assert_eq!(answer.records[0].name.as_ref(), "test.");
    assert_eq!(answer.records[0].data, RecordData::TXT("254".into()));
}

#[test]
fn test_ip_pair_encodings() {
    let synthesizer = ResponseSynthesizer::new(0);
    let pair = HandlerResult::IpPair {
        v4: Some(Ipv4Addr::new(203, 0, 113, 1)),
        v6: Some("2001:db8::2".parse::<Ipv6Addr>().unwrap()),
    };

    let txt = synthesizer.synthesize(&name(), &Command::PublicIp, RecordType::TXT, pair.clone());
    assert_eq!(
        txt.records[0].data,
        RecordData::TXT("IPv4: 203.0.113.1, IPv6: 2001:db8::2".into())
    );

    let a = synthesizer.synthesize(&name(), &Command::PublicIp, RecordType::A, pair.clone());
    assert_eq!(a.records[0].data, RecordData::A(Ipv4Addr::new(203, 0, 113, 1)));

    let only_v4 = HandlerResult::IpPair {
        v4: Some(Ipv4Addr::new(203, 0, 113, 1)),
        v6: None,
    };
    let txt = synthesizer.synthesize(&name(), &Command::PublicIp, RecordType::TXT, only_v4.clone());
    assert_eq!(txt.records[0].data, RecordData::TXT("IPv4: 203.0.113.1".into()));

    let aaaa = synthesizer.synthesize(&name(), &Command::PublicIp, RecordType::AAAA, only_v4);
    assert_eq!(aaaa.outcome, ResponseOutcome::NoData);
}

#[test]
fn test_mismatched_result_shape_is_nodata() {
    let synthesizer = ResponseSynthesizer::new(0);
    let answer = synthesizer.synthesize(
        &name(),
        &Command::ClientIp,
        RecordType::AAAA,
        HandlerResult::Ipv4(Ipv4Addr::LOCALHOST),
    );
    assert_eq!(answer.outcome, ResponseOutcome::NoData);
}
