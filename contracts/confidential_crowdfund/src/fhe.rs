//! # FHE coprocessor interface
//!
//! The campaign never touches ciphertexts itself. Encrypted arithmetic,
//! trivial encodings and input-proof verification are delegated to a
//! coprocessor contract whose address is fixed at `init`. Every call
//! returns a fresh opaque handle; plaintexts never cross this boundary.
//!
//! Swapping the scheme means deploying a different coprocessor behind the
//! same interface. The test suite uses a plaintext passthrough.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::{EncryptedAmount, EncryptedBool, EncryptedInput};
use crate::Error;

#[contractclient(name = "CoprocessorClient")]
pub trait Coprocessor {
    /// Check `input.proof` against `(input.ciphertext, campaign, contributor)`
    /// and register the ciphertext as a usable handle. Fails on a bad proof.
    fn verify_input(
        env: Env,
        input: EncryptedInput,
        campaign: Address,
        contributor: Address,
    ) -> EncryptedAmount;

    /// Homomorphic `lhs + rhs`.
    fn add(env: Env, lhs: EncryptedAmount, rhs: EncryptedAmount) -> EncryptedAmount;

    /// Homomorphic `lhs >= rhs`.
    fn ge(env: Env, lhs: EncryptedAmount, rhs: EncryptedAmount) -> EncryptedBool;

    /// Trivial (public) encryption of a known amount.
    fn encode_amount(env: Env, value: u64) -> EncryptedAmount;

    /// Trivial (public) encryption of a known boolean.
    fn encode_bool(env: Env, value: bool) -> EncryptedBool;
}

/// Run the trusted verifier over a contributor's input.
///
/// Any failure inside the coprocessor surfaces as
/// `Error::ProofVerificationFailed`; nothing has been written at that point.
pub fn verify_input(
    env: &Env,
    coprocessor: &Address,
    input: &EncryptedInput,
    contributor: &Address,
) -> Result<EncryptedAmount, Error> {
    let client = CoprocessorClient::new(env, coprocessor);
    match client.try_verify_input(input, &env.current_contract_address(), contributor) {
        Ok(Ok(amount)) => Ok(amount),
        _ => Err(Error::ProofVerificationFailed),
    }
}
