//! Tests against the reference BIP340 test vectors.

use super::*;

const VECTORS: &str = include_str!("../fixtures/bip340_vectors.csv");

struct Vector {
    index: u32,
    secret: Option<Vec<u8>>,
    pubkey: Vec<u8>,
    aux: Option<Vec<u8>>,
    msg: Vec<u8>,
    sig: Vec<u8>,
    valid: bool,
}

fn vectors() -> Vec<Vector> {
    VECTORS
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            let opt_hex = |s: &str| {
                if s.is_empty() {
                    None
                } else {
                    Some(hex::decode(s).expect("fixture hex"))
                }
            };
            Vector {
                index: fields[0].parse().expect("fixture index"),
                secret: opt_hex(fields[1]),
                pubkey: hex::decode(fields[2]).expect("fixture hex"),
                aux: opt_hex(fields[3]),
                msg: hex::decode(fields[4]).expect("fixture hex"),
                sig: hex::decode(fields[5]).expect("fixture hex"),
                valid: fields[6] == "TRUE",
            }
        })
        .collect()
}

#[test]
fn sign_matches_reference_vectors() {
    for v in vectors() {
        let (secret, aux) = match (&v.secret, &v.aux) {
            (Some(secret), Some(aux)) => (secret, aux),
            _ => continue,
        };
        let sig = sign(secret, &v.msg, aux).expect("vector secret signs");
        assert_eq!(
            sig.to_bytes().as_slice(),
            v.sig.as_slice(),
            "vector {}",
            v.index
        );
    }
}

#[test]
fn pubkey_matches_reference_vectors() {
    for v in vectors() {
        let secret = match &v.secret {
            Some(secret) => secret,
            None => continue,
        };
        let pk = x_only_pubkey(secret).expect("vector secret is valid");
        assert_eq!(pk.as_slice(), v.pubkey.as_slice(), "vector {}", v.index);
    }
}

#[test]
fn verify_matches_reference_vectors() {
    for v in vectors() {
        let ok = verify(&v.pubkey, &v.msg, &v.sig).expect("fixture buffers are well formed");
        assert_eq!(ok, v.valid, "vector {}", v.index);
    }
}

#[test]
fn batch_accepts_all_valid_vectors() {
    let all = vectors();
    let valid: Vec<&Vector> = all.iter().filter(|v| v.valid).collect();
    assert!(valid.len() >= 4);

    let pks: Vec<&[u8]> = valid.iter().map(|v| v.pubkey.as_slice()).collect();
    let msgs: Vec<&[u8]> = valid.iter().map(|v| v.msg.as_slice()).collect();
    let sigs: Vec<&[u8]> = valid.iter().map(|v| v.sig.as_slice()).collect();
    assert_eq!(batch_verify(&pks, &msgs, &sigs), Ok(true));
}

#[test]
fn batch_rejects_one_bad_signature() {
    let all = vectors();
    let valid: Vec<&Vector> = all.iter().filter(|v| v.valid).collect();

    let mut sigs: Vec<Vec<u8>> = valid.iter().map(|v| v.sig.clone()).collect();
    sigs[1][40] ^= 0x01;

    let pks: Vec<&[u8]> = valid.iter().map(|v| v.pubkey.as_slice()).collect();
    let msgs: Vec<&[u8]> = valid.iter().map(|v| v.msg.as_slice()).collect();
    let sig_refs: Vec<&[u8]> = sigs.iter().map(|s| s.as_slice()).collect();
    assert_eq!(batch_verify(&pks, &msgs, &sig_refs), Ok(false));
}

#[test]
fn batch_rejects_one_bad_message() {
    let all = vectors();
    let valid: Vec<&Vector> = all.iter().filter(|v| v.valid).collect();

    let mut msgs: Vec<Vec<u8>> = valid.iter().map(|v| v.msg.clone()).collect();
    msgs[2][0] ^= 0x01;

    let pks: Vec<&[u8]> = valid.iter().map(|v| v.pubkey.as_slice()).collect();
    let msg_refs: Vec<&[u8]> = msgs.iter().map(|m| m.as_slice()).collect();
    let sigs: Vec<&[u8]> = valid.iter().map(|v| v.sig.as_slice()).collect();
    assert_eq!(batch_verify(&pks, &msg_refs, &sigs), Ok(false));
}

#[test]
fn batch_rejects_one_bad_pubkey() {
    let all = vectors();
    let valid: Vec<&Vector> = all.iter().filter(|v| v.valid).collect();

    let mut pks: Vec<Vec<u8>> = valid.iter().map(|v| v.pubkey.clone()).collect();
    pks[0][31] ^= 0x01;

    let pk_refs: Vec<&[u8]> = pks.iter().map(|p| p.as_slice()).collect();
    let msgs: Vec<&[u8]> = valid.iter().map(|v| v.msg.as_slice()).collect();
    let sigs: Vec<&[u8]> = valid.iter().map(|v| v.sig.as_slice()).collect();
    assert_eq!(batch_verify(&pk_refs, &msgs, &sigs), Ok(false));
}

#[test]
fn flipping_any_input_breaks_verification() {
    let v = &vectors()[0];
    assert!(v.valid);

    let mut sig = v.sig.clone();
    sig[17] ^= 0x04;
    assert_eq!(verify(&v.pubkey, &v.msg, &sig), Ok(false));

    let mut msg = v.msg.clone();
    msg[31] ^= 0x01;
    assert_eq!(verify(&v.pubkey, &msg, &v.sig), Ok(false));

    let mut pk = v.pubkey.clone();
    pk[0] ^= 0x80;
    assert_eq!(verify(&pk, &v.msg, &v.sig), Ok(false));
}

#[test]
fn verify_rejects_r_at_field_size() {
    let v = &vectors()[1];
    assert!(v.valid);

    let mut sig = v.sig.clone();
    let p = hex::decode("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f")
        .unwrap();
    sig[..32].copy_from_slice(&p);
    assert_eq!(verify(&v.pubkey, &v.msg, &sig), Ok(false));
}

#[test]
fn sign_rejects_out_of_range_secrets() {
    let msg = [0u8; 32];
    let aux = [0u8; 32];
    assert_eq!(
        sign(&[0u8; 32], &msg, &aux).unwrap_err(),
        SchnorrError::InvalidSecretKey
    );
    // the group order itself is not a valid secret
    let order = hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141")
        .unwrap();
    assert_eq!(
        sign(&order, &msg, &aux).unwrap_err(),
        SchnorrError::InvalidSecretKey
    );
}

#[test]
fn verify_rejects_malformed_buffers() {
    let v = &vectors()[0];
    assert_eq!(
        verify(&v.pubkey[..31], &v.msg, &v.sig),
        Err(SchnorrError::InvalidPublicKey)
    );
    assert_eq!(
        verify(&v.pubkey, &v.msg[..16], &v.sig),
        Err(SchnorrError::InvalidMessage)
    );
    assert_eq!(
        verify(&v.pubkey, &v.msg, &v.sig[..63]),
        Err(SchnorrError::InvalidSignature)
    );
}

#[test]
fn sign_is_deterministic_per_aux() {
    let sk = {
        let mut sk = [0u8; 32];
        sk[31] = 42;
        sk
    };
    let msg = [9u8; 32];

    let a = sign(&sk, &msg, &[0u8; 32]).unwrap();
    let b = sign(&sk, &msg, &[0u8; 32]).unwrap();
    let c = sign(&sk, &msg, &[1u8; 32]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let pk = x_only_pubkey(&sk).unwrap();
    assert_eq!(verify(&pk, &msg, &a.to_bytes()), Ok(true));
    assert_eq!(verify(&pk, &msg, &c.to_bytes()), Ok(true));
}
