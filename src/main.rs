//! Demo: key generation, dimension growth, and the hex round-trip contract.

use std::error::Error;

use itertools::Itertools;
use rlwe_core::{Ciphertext, LweParams, PublicKey, RingElement, RingLwe};

fn main() -> Result<(), Box<dyn Error>> {
    // The legacy defaults (512, 4096) are rejected up front: 4096 is not
    // prime, so the transform would have no inverse.
    match RingLwe::new(LweParams::default()) {
        Err(e) => println!("legacy defaults: {e}"),
        Ok(_) => println!("legacy defaults unexpectedly accepted"),
    }

    let params = LweParams::new(8, 257)?;
    println!(
        "params: degree = {}, q = {}, root = {}",
        params.poly_degree, params.modulus, params.root
    );

    let mut engine = RingLwe::new(params)?;
    let public = engine.public_key();
    println!(
        "public key components: {} coefficients each (degree {} doubled by the convolution)",
        public.first.len(),
        params.poly_degree
    );
    println!("first component: [{}]", public.first.coeffs.iter().join(", "));

    // Generated components outgrow the ring dimension, so encryption against
    // them refuses to run rather than corrupting silently.
    match engine.encrypt(b"hi") {
        Err(e) => println!("encrypt with generated keys: {e}"),
        Ok(_) => println!("encrypt with generated keys succeeded"),
    }

    // Dimension-conforming key material exercises the hex round-trip
    // contract: decrypt returns the hex encoding of the recovered bytes.
    let mut first = vec![0u128; params.poly_degree];
    first[0] = 1;
    let mut engine = RingLwe::with_key_pair(
        params,
        RingElement::zeros(params.poly_degree, params.modulus),
        PublicKey {
            first: RingElement::new(first, params.modulus),
            second: RingElement::zeros(params.poly_degree, params.modulus),
        },
    );

    let encrypted = engine.encrypt(b"hi")?;
    println!(
        "encrypt(\"hi\"): c1 has {} coefficients, c2 has {}",
        encrypted.c1.len(),
        encrypted.c2.len()
    );

    let conforming = Ciphertext {
        c1: RingElement::zeros(params.poly_degree, params.modulus),
        c2: encrypted.c2,
    };
    let recovered = engine.decrypt(&conforming)?;
    println!("decrypt -> {recovered:?} (hex of \"hi\")");

    Ok(())
}
