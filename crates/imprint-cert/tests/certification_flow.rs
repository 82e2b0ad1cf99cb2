//! # Certification Flow Tests
//!
//! End-to-end coverage of the certify → disclose → verify lifecycle:
//! round-trip equality, disclosure soundness, tamper detection, tolerance
//! of custom and absent fields, and the degenerate empty-data case.

use serde_json::{json, Value};

use imprint_cert::{Certifier, PropPath, PropProof};

fn certifier() -> Certifier {
    Certifier::from_schema_value(&json!({
        "type": "object",
        "properties": {
            "a": { "type": "string" },
            "b": {
                "type": "object",
                "properties": {
                    "c": { "type": "string" },
                    "d": { "type": "string" }
                }
            }
        }
    }))
    .unwrap()
}

fn data() -> Value {
    json!({"a": "x", "b": {"c": "y", "d": "z"}})
}

#[test]
fn notarize_round_trips_through_calculate() {
    let cert = certifier();
    let proofs = cert.notarize(&data()).unwrap();
    let imprint = cert.imprint(&data()).unwrap();

    assert_eq!(cert.calculate(&data(), &proofs), Some(imprint));
}

#[test]
fn notarization_is_deterministic() {
    let cert = certifier();
    assert_eq!(cert.notarize(&data()).unwrap(), cert.notarize(&data()).unwrap());
    assert_eq!(cert.imprint(&data()).unwrap(), cert.imprint(&data()).unwrap());
}

#[test]
fn imprint_composes_group_roots_bottom_up() {
    // Root hashes [x, root(b)] where root(b) hashes [y, z]; leaf order is
    // lexicographic, so a precedes the b subtree.
    let cert = certifier();
    let merkle = imprint_merkle::MerkleTree::new();

    let b_root = merkle
        .notarize(&[json!("y"), json!("z")])
        .unwrap()
        .root()
        .unwrap()
        .to_string();
    let expected = merkle
        .notarize(&[json!("x"), json!(b_root)])
        .unwrap()
        .root()
        .unwrap()
        .to_string();

    assert_eq!(cert.imprint(&data()).unwrap(), expected);
}

#[test]
fn full_certification_has_one_proof_per_group() {
    let cert = certifier();
    let proofs = cert.notarize(&data()).unwrap();
    let keys: Vec<String> = proofs.iter().map(|p| p.key()).collect();
    assert_eq!(keys, vec!["", "b"]);
}

#[test]
fn any_disclosure_reconstructs_the_true_root() {
    let cert = certifier();
    let imprint = cert.imprint(&data()).unwrap();

    let requests: &[&[&str]] = &[
        &["a"],
        &["b.c"],
        &["b.d"],
        &["b"],
        &["a", "b.c"],
        &["a", "b"],
    ];
    for request in requests {
        let paths: Vec<PropPath> = request.iter().map(|p| PropPath::parse(p)).collect();
        let proofs = cert.disclose(&data(), &paths).unwrap();
        assert_eq!(
            cert.imprint_proofs(&proofs),
            imprint,
            "request {request:?}"
        );
    }
}

#[test]
fn disclosing_one_leaf_verifies_against_stripped_data() {
    let cert = certifier();
    let imprint = cert.imprint(&data()).unwrap();

    let proofs = cert.disclose(&data(), &[PropPath::parse("b.c")]).unwrap();

    // Exactly the root group and the b group survive; the root group
    // reveals only the b compound hash, the b group reveals only c.
    let keys: Vec<String> = proofs.iter().map(|p| p.key()).collect();
    assert_eq!(keys, vec!["", "b"]);
    assert_eq!(proofs[0].values.len(), 1);
    assert_eq!(proofs[0].values[0].index, 1);
    assert_eq!(proofs[1].values.len(), 1);
    assert_eq!(proofs[1].values[0].value, json!("y"));

    // A holder with only c defined still verifies and gets the same root.
    let stripped = json!({"b": {"c": "y"}});
    assert_eq!(cert.calculate(&stripped, &proofs), Some(imprint));
}

#[test]
fn disclosing_a_subtree_reveals_all_its_leaves() {
    let cert = certifier();
    let imprint = cert.imprint(&data()).unwrap();

    let proofs = cert.disclose(&data(), &[PropPath::parse("b")]).unwrap();
    let b_group = proofs.iter().find(|p| p.key() == "b").unwrap();
    assert_eq!(b_group.values.len(), 2);

    let stripped = json!({"b": {"c": "y", "d": "z"}});
    assert_eq!(cert.calculate(&stripped, &proofs), Some(imprint));
}

#[test]
fn tampered_disclosure_is_rejected() {
    let cert = certifier();
    let proofs = cert.disclose(&data(), &[PropPath::parse("b.c")]).unwrap();

    let mut altered: Vec<PropProof> = proofs.clone();
    let b_group = altered.iter_mut().find(|p| p.key() == "b").unwrap();
    b_group.values[0].value = json!("forged");

    // The holder's data claims the forged value: inclusion passes against
    // the altered proof, but the reconstructed root no longer matches the
    // committed imprint.
    let claimed = json!({"b": {"c": "forged"}});
    let imprint = cert.imprint(&data()).unwrap();
    assert_ne!(cert.calculate(&claimed, &altered), Some(imprint.clone()));

    // And data holding the true value fails inclusion outright.
    let truthful = json!({"b": {"c": "y"}});
    assert_eq!(cert.calculate(&truthful, &altered), None);
}

#[test]
fn custom_fields_neither_change_the_root_nor_fail_verification() {
    let cert = certifier();
    let imprint = cert.imprint(&data()).unwrap();

    let mut with_custom = data();
    with_custom["custom"] = json!("undeclared");
    with_custom["b"]["extra"] = json!(42);

    assert_eq!(cert.imprint(&with_custom).unwrap(), imprint);

    let proofs = cert.notarize(&data()).unwrap();
    assert_eq!(cert.calculate(&with_custom, &proofs), Some(imprint));
}

#[test]
fn absent_declared_fields_are_skipped_by_verification() {
    let cert = certifier();
    let partial = json!({"a": "x", "b": {"c": "y"}});

    let proofs = cert.notarize(&partial).unwrap();
    let imprint = cert.imprint(&partial).unwrap();
    assert_eq!(cert.calculate(&partial, &proofs), Some(imprint.clone()));

    // d stays undefined everywhere; dropping it from the data entirely
    // changes nothing for verification.
    let fewer = json!({"a": "x", "b": {"c": "y"}});
    assert_eq!(cert.calculate(&fewer, &proofs), Some(imprint));
}

#[test]
fn empty_data_against_empty_schema_yields_the_empty_imprint() {
    let cert = Certifier::from_schema_value(&json!({
        "type": "object",
        "properties": {}
    }))
    .unwrap();

    let proofs = cert.notarize(&json!({})).unwrap();
    assert!(proofs.is_empty());
    assert_eq!(cert.imprint(&json!({})).unwrap(), cert.empty_imprint());
    assert_eq!(
        cert.calculate(&json!({}), &proofs),
        Some(cert.empty_imprint())
    );
}

#[test]
fn array_elements_certify_and_disclose_by_index() {
    let cert = Certifier::from_schema_value(&json!({
        "type": "object",
        "properties": {
            "docs": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer" },
                        "name": { "type": "string" }
                    }
                }
            }
        }
    }))
    .unwrap();

    let data = json!({"docs": [
        {"id": 1, "name": "first"},
        {"id": 2, "name": "second"}
    ]});
    let imprint = cert.imprint(&data).unwrap();

    let proofs = cert.disclose(&data, &[PropPath::parse("docs.1.name")]).unwrap();
    let keys: Vec<String> = proofs.iter().map(|p| p.key()).collect();
    assert_eq!(keys, vec!["", "docs", "docs.1"]);

    let stripped = json!({"docs": [{}, {"name": "second"}]});
    assert_eq!(cert.calculate(&stripped, &proofs), Some(imprint));
}

#[test]
fn proofs_survive_a_serde_round_trip() {
    let cert = certifier();
    let imprint = cert.imprint(&data()).unwrap();

    let proofs = cert.disclose(&data(), &[PropPath::parse("b.c")]).unwrap();
    let wire = serde_json::to_string(&proofs).unwrap();
    let back: Vec<PropProof> = serde_json::from_str(&wire).unwrap();

    let stripped = json!({"b": {"c": "y"}});
    assert_eq!(cert.calculate(&stripped, &back), Some(imprint));
}
