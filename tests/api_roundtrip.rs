//! End-to-end tests for the console REST API.

use serde_json::{json, Value};

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_status_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::start_console(&dir).await;

    let body: Value = client()
        .get(format!("http://{}/api/status", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "operational");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_plmn_get_extracts_fixture_fields() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::start_console(&dir).await;

    let body: Value = client()
        .get(format!("http://{}/api/plmn", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["gNB_ID"], "0xe00");
    assert_eq!(body["tracking_area_code"], "1");
    assert_eq!(body["mcc"], "001");
    assert_eq!(body["mnc"], "01");
    assert_eq!(body["mnc_length"], "2");

    shutdown.trigger();
}

#[tokio::test]
async fn test_plmn_post_patches_only_targeted_fields() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::start_console(&dir).await;
    let http = client();

    let mut record: Value = http
        .get(format!("http://{}/api/plmn", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    record["mnc"] = json!("70");

    let res = http
        .post(format!("http://{}/api/plmn", addr))
        .json(&record)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);

    // The edit lands in the file; operator-authored content survives
    // byte-for-byte.
    let on_disk = std::fs::read_to_string(dir.path().join("gnb.conf")).unwrap();
    assert!(on_disk.contains("mnc = 70"));
    assert!(on_disk.contains("# gNB configuration -- operator maintained\n"));
    assert!(on_disk.contains("Active_gNBs = ( \"gNB-lab-01\" );"));
    assert!(on_disk.contains("gNB_name  =  \"gNB-lab-01\";"));
    assert!(on_disk.contains("amf_ip_address = ( { ipv4 = \"192.168.70.132\"; } );"));
    assert!(on_disk.contains("gNB_ID    =  0xe00;"));
    assert!(on_disk.contains("mcc = 001"));

    // And a fresh GET reflects it.
    let reread: Value = http
        .get(format!("http://{}/api/plmn", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reread["mnc"], "70");
    assert_eq!(reread["mcc"], "001");

    shutdown.trigger();
}

#[tokio::test]
async fn test_plmn_get_on_unreadable_file_is_500() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::start_console(&dir).await;

    std::fs::remove_file(dir.path().join("gnb.conf")).unwrap();

    let res = client()
        .get(format!("http://{}/api/plmn", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Failed to read PLMN configuration");

    shutdown.trigger();
}

#[tokio::test]
async fn test_sib8_roundtrip_with_multiline_text() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::start_console(&dir).await;
    let http = client();

    let record = json!({
        "messageIdentifier": "1112",
        "serialNumber": "3FF2",
        "dataCodingScheme": "11",
        "text": "Earthquake warning\nMove to open ground",
        "lan": "6537"
    });

    let res = http
        .post(format!("http://{}/api/sib8", addr))
        .json(&record)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    // On disk the text is one pipe-joined line; the wire shows newlines.
    let on_disk = std::fs::read_to_string(dir.path().join("sib8.conf")).unwrap();
    assert!(on_disk.contains("text=Earthquake warning|Move to open ground;\n"));

    let reread: Value = http
        .get(format!("http://{}/api/sib8", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reread, record);

    shutdown.trigger();
}

#[tokio::test]
async fn test_subscriber_crud_flow() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::start_console(&dir).await;
    let http = client();

    // Create with defaulted credentials.
    let res = http
        .post(format!("http://{}/api/subscribers", addr))
        .json(&json!({ "ueid": "001010000059460", "encPermanentKey": "", "encOpcKey": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    // Create with explicit credentials.
    let res = http
        .post(format!("http://{}/api/subscribers", addr))
        .json(&json!({
            "ueid": "001010000059455",
            "encPermanentKey": "00112233445566778899aabbccddeeff",
            "encOpcKey": "ffeeddccbbaa99887766554433221100"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    // Listing is ordered by ueid ascending.
    let list: Value = http
        .get(format!("http://{}/api/subscribers", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["ueid"], "001010000059455");
    assert_eq!(list[1]["ueid"], "001010000059460");
    assert_eq!(list[1]["encPermanentKey"], "5686e601f3a1942d4c5cd262ba6b4b20");
    assert_eq!(list[1]["encOpcKey"], "aeb1cabd8ed7a09b48d17eb3d8af172c");

    // Partial update touches only the supplied field.
    let res = http
        .put(format!("http://{}/api/subscribers/001010000059460", addr))
        .json(&json!({ "encOpcKey": "0102030405060708090a0b0c0d0e0f10" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let record: Value = http
        .get(format!("http://{}/api/subscribers/001010000059460", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(record["encPermanentKey"], "5686e601f3a1942d4c5cd262ba6b4b20");
    assert_eq!(record["encOpcKey"], "0102030405060708090a0b0c0d0e0f10");
    assert_eq!(record["supi"], "001010000059460");
    assert_eq!(record["protectionParameterId"], record["encPermanentKey"]);
    assert_eq!(record["authenticationMethod"], "5G_AKA");
    assert_eq!(record["sequenceNumber"]["sqn"], "000000000020");

    // Delete, then the key is gone.
    let res = http
        .delete(format!("http://{}/api/subscribers/001010000059460", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let res = http
        .delete(format!("http://{}/api/subscribers/001010000059460", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_subscriber_error_statuses() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::start_console(&dir).await;
    let http = client();

    // Missing ueid on create.
    let res = http
        .post(format!("http://{}/api/subscribers", addr))
        .json(&json!({ "encPermanentKey": "aa" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "ueid is required");

    // Update with nothing to apply.
    http.post(format!("http://{}/api/subscribers", addr))
        .json(&json!({ "ueid": "A" }))
        .send()
        .await
        .unwrap();
    let res = http
        .put(format!("http://{}/api/subscribers/A", addr))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    // Update on an absent key.
    let res = http
        .put(format!("http://{}/api/subscribers/missing", addr))
        .json(&json!({ "encOpcKey": "bb" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}
