#![cfg(feature = "deterministic")]

use hex_literal::hex;
use hybrid_array::Array;
use rand::{SeedableRng, rngs::StdRng};
use sha3::{
    Shake256,
    digest::{ExtendableOutput, Update, XofReader},
};
use sike::kem::Kem;
use sike::pke::{self, PrivateKey};
use sike::*;

mod common;
use common::GroupEngine;

type Engine = GroupEngine<SikeP434Params>;

fn shake256(inputs: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for x in inputs {
        h.update(x);
    }
    h.finalize_xof().read(out);
}

#[test]
fn encapsulation_derivation() {
    let mut rng = StdRng::seed_from_u64(434);
    let (dk, ek) = Kem::<Engine>::generate(&mut rng);
    let m: Message<SikeP434Params> = Array(hex!("000102030405060708090a0b0c0d0e0f"));

    let (ct, k) = ek.encapsulate_deterministic(&m).unwrap();
    let (ct2, k2) = ek.encapsulate_deterministic(&m).unwrap();
    assert_eq!(ct, ct2);
    assert_eq!(k, k2);

    // r = SHAKE256(m || pk), and c0 is the public key of r reduced mod 2^eA
    let mut r = ScalarEncoding::<SikeP434Params>::default();
    shake256(&[m.as_slice(), ek.as_bytes().as_slice()], &mut r);
    let ephemeral = PrivateKey::from_randomness(Party::Alice, &r);
    assert_eq!(ct.c0(), &ephemeral.public_key::<Engine>());
    assert_eq!(ct, pke::encrypt_deterministic::<Engine>(ek.public_key(), &m, &r));

    // K = SHAKE256(m || c0 || c1)
    let mut expected = SharedKey::<SikeP434Params>::default();
    shake256(
        &[m.as_slice(), ct.c0().as_bytes().as_slice(), ct.c1().as_slice()],
        &mut expected,
    );
    assert_eq!(k, expected);

    // Decapsulation recovers m and agrees on K
    assert_eq!(pke::decrypt(dk.private_key(), &ct), m);
    assert_eq!(dk.decapsulate(&ct), Ok(k));
}

#[test]
fn messages_are_masked() {
    let mut rng = StdRng::seed_from_u64(435);
    let (_, ek) = Kem::<Engine>::generate(&mut rng);

    let m0 = Message::<SikeP434Params>::default();
    let mut m1 = m0.clone();
    m1[15] = 1;

    let (ct0, k0) = ek.encapsulate_deterministic(&m0).unwrap();
    let (ct1, k1) = ek.encapsulate_deterministic(&m1).unwrap();
    assert_ne!(ct0.c0(), ct1.c0());
    assert_ne!(ct0.c1(), &m0);
    assert_ne!(k0, k1);
}
