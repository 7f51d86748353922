//! 按名称/ID 查询测试

mod common;

use cs_client::{CsError, HttpMethod, ListOption};

use common::{client, FakeTransport};

const ZONE_ID: &str = "9b2c1c7e-6a3e-4f5b-8a51-2f1d2b3c4d5e";
const PROJECT_ID: &str = "0f4e7a2b-1c3d-4e5f-8a9b-0c1d2e3f4a5b";

#[tokio::test]
async fn test_zone_by_name_single() {
    let transport = FakeTransport::new();
    transport.reply(
        "listZones",
        r#"{"listzonesresponse":{"count":1,"zone":[{"id":"z1","name":"zone-a","networktype":"Advanced"}]}}"#,
    );
    let client = client(&transport);

    let zone = client.zone().get_zone_by_name("zone-a", &[]).await.unwrap();
    assert_eq!(zone.id, "z1");
    assert_eq!(zone.network_type, "Advanced");

    let id = client.zone().get_zone_id("zone-a", &[]).await.unwrap();
    assert_eq!(id, "z1");

    let calls = transport.calls_to("listZones");
    assert_eq!(calls[0].0, HttpMethod::Get);
    assert_eq!(calls[0].1.get("name"), Some("zone-a"));
}

#[tokio::test]
async fn test_zone_by_name_not_found() {
    let transport = FakeTransport::new();
    transport.reply("listZones", r#"{"listzonesresponse":{}}"#);
    let client = client(&transport);

    let err = client.zone().get_zone_by_name("zone-x", &[]).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("zone-x"));
}

#[tokio::test]
async fn test_domain_by_name_exact_match_among_many() {
    let transport = FakeTransport::new();
    transport.reply(
        "listDomains",
        r#"{"listdomainsresponse":{"count":3,"domain":[{"id":"d1","name":"ops-eu"},{"id":"d2","name":"ops"},{"id":"d3","name":"ops-us"}]}}"#,
    );
    let client = client(&transport);

    let domain = client.domain().get_domain_by_name("ops", &[]).await.unwrap();
    assert_eq!(domain.id, "d2");

    let calls = transport.calls_to("listDomains");
    assert_eq!(calls[0].1.get("listall"), Some("true"));
}

#[tokio::test]
async fn test_domain_by_name_ambiguous() {
    let transport = FakeTransport::new();
    transport.reply(
        "listDomains",
        r#"{"listdomainsresponse":{"count":2,"domain":[{"id":"d1","name":"ops-eu"},{"id":"d3","name":"ops-us"}]}}"#,
    );
    let client = client(&transport);

    let err = client.domain().get_domain_by_name("ops", &[]).await.unwrap_err();
    assert!(matches!(err, CsError::Ambiguous { count: 2, .. }));
}

#[tokio::test]
async fn test_project_by_id_missing_entity() {
    let transport = FakeTransport::new();
    transport.reply_error(
        "listProjects",
        431,
        "Invalid parameter id value=p9 due to incorrect long value format, or entity does not exist or due to incorrect parameter annotation for the field in api cmd class.",
    );
    let client = client(&transport);

    let err = client.project().get_project_by_id("p9", &[]).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_by_id_duplicate_records() {
    let transport = FakeTransport::new();
    transport.reply(
        "listSSHKeyPairs",
        r#"{"listsshkeypairsresponse":{"count":2,"sshkeypair":[{"id":"k1","name":"a"},{"id":"k1","name":"b"}]}}"#,
    );
    let client = client(&transport);

    let err = client.ssh().get_ssh_key_pair_by_id("k1", &[]).await.unwrap_err();
    assert!(matches!(err, CsError::IdNotUnique { count: 2, .. }));
}

#[tokio::test]
async fn test_zone_option_resolves_name() {
    let transport = FakeTransport::new();
    transport
        .reply(
            "listZones",
            r#"{"listzonesresponse":{"count":1,"zone":[{"id":"z1","name":"zone-a"}]}}"#,
        )
        .reply(
            "listSnapshots",
            r#"{"listsnapshotsresponse":{"count":1,"snapshot":[{"id":"s1","name":"nightly","zoneid":"z1"}]}}"#,
        );
    let client = client(&transport);

    let snapshot = client
        .snapshot()
        .get_snapshot_by_name("nightly", &[ListOption::zone("zone-a")])
        .await
        .unwrap();
    assert_eq!(snapshot.id, "s1");

    let calls = transport.calls_to("listSnapshots");
    assert_eq!(calls[0].1.get("zoneid"), Some("z1"));
    assert_eq!(calls[0].1.get("name"), Some("nightly"));
}

#[tokio::test]
async fn test_id_options_are_not_resolved() {
    let transport = FakeTransport::new();
    transport.reply(
        "listSSHKeyPairs",
        r#"{"listsshkeypairsresponse":{"count":1,"sshkeypair":[{"id":"k1","name":"deploy","fingerprint":"aa:bb"}]}}"#,
    );
    let client = client(&transport);

    let key = client
        .ssh()
        .get_ssh_key_pair_by_name(
            "deploy",
            &[
                ListOption::project(PROJECT_ID),
                ListOption::zone(ZONE_ID),
                ListOption::domain("d1"),
                ListOption::param("account", "admin"),
            ],
        )
        .await
        .unwrap();
    assert_eq!(key.fingerprint, "aa:bb");

    // 只有一次列表调用，UUID 形式的选项不再查询
    assert_eq!(transport.calls().len(), 1);
    let params = &transport.calls()[0].1;
    assert_eq!(params.get("projectid"), Some(PROJECT_ID));
    assert_eq!(params.get("zoneid"), Some(ZONE_ID));
    assert_eq!(params.get("domainid"), Some("d1"));
    assert_eq!(params.get("account"), Some("admin"));
}

#[tokio::test]
async fn test_project_option_resolves_name() {
    let transport = FakeTransport::new();
    transport
        .reply(
            "listProjects",
            r#"{"listprojectsresponse":{"count":1,"project":[{"id":"p1","name":"infra"}]}}"#,
        )
        .reply(
            "listVMSnapshot",
            r#"{"listvmsnapshotresponse":{"count":1,"vmSnapshot":[{"id":"vs1","name":"before-upgrade","virtualmachineid":"vm1"}]}}"#,
        );
    let client = client(&transport);

    let id = client
        .snapshot()
        .get_vm_snapshot_id("before-upgrade", &[ListOption::project("infra")])
        .await
        .unwrap();
    assert_eq!(id, "vs1");

    let projects = transport.calls_to("listProjects");
    assert_eq!(projects[0].1.get("name"), Some("infra"));
    assert_eq!(projects[0].1.get("listall"), Some("true"));

    let snapshots = transport.calls_to("listVMSnapshot");
    assert_eq!(snapshots[0].1.get("projectid"), Some("p1"));
}
