//! # Signature Flows
//!
//! Wallet-side signing with `shared-crypto` keys against verifier-side
//! recovery, including payloads that arrive as JSON.

#[cfg(test)]
mod tests {
    use ar_04_signature_verifier::{
        Action, ActionType, AmountType, Approval, Input, Output, SignatureVerifierApi,
        SignatureVerifierService, TransactionData,
    };
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{name_hash, RegistryError, U256};

    const ROUTER: [u8; 20] = [0x5E; 20];
    const DAI: [u8; 20] = [0x6B; 20];
    const CDAI: [u8; 20] = [0x5D; 20];

    fn deposit_batch(nonce: u64) -> TransactionData {
        TransactionData {
            actions: vec![Action {
                action_type: ActionType::Deposit,
                protocol_name: name_hash("Compound"),
                adapter_index: U256::zero(),
                tokens: vec![DAI],
                amounts: vec![U256::exp10(18)],
                amount_types: vec![AmountType::Relative],
                data: vec![],
            }],
            inputs: vec![Input {
                token: DAI,
                amount: U256::exp10(21),
                amount_type: AmountType::Absolute,
                fee: U256::exp10(15),
                beneficiary: [0xFE; 20],
            }],
            outputs: vec![Output {
                token: CDAI,
                amount: U256::from(4_900_000_000_000u64),
            }],
            nonce: U256::from(nonce),
        }
    }

    fn sign(keypair: &Secp256k1KeyPair, verifier: &SignatureVerifierService, data: &TransactionData) -> Vec<u8> {
        let digest =
            verifier.hash_transaction_data(&data.actions, &data.inputs, &data.outputs, data.nonce);
        keypair
            .sign_prehash(&digest)
            .unwrap()
            .as_bytes()
            .to_vec()
    }

    #[test]
    fn test_wallet_signature_recovers_wallet() {
        let verifier = SignatureVerifierService::new(ROUTER);
        let wallet = Secp256k1KeyPair::from_bytes([0x42; 32]).unwrap();
        let data = deposit_batch(0);

        let signature = sign(&wallet, &verifier, &data);
        assert_eq!(
            verifier.get_account_from_signature(&data, &signature).unwrap(),
            wallet.address()
        );
    }

    #[test]
    fn test_distinct_wallets_recover_distinctly() {
        let verifier = SignatureVerifierService::new(ROUTER);
        let data = deposit_batch(0);

        let alice = Secp256k1KeyPair::generate();
        let bob = Secp256k1KeyPair::generate();
        let from_alice = verifier
            .get_account_from_signature(&data, &sign(&alice, &verifier, &data))
            .unwrap();
        let from_bob = verifier
            .get_account_from_signature(&data, &sign(&bob, &verifier, &data))
            .unwrap();

        assert_eq!(from_alice, alice.address());
        assert_eq!(from_bob, bob.address());
        assert_ne!(from_alice, from_bob);
    }

    #[test]
    fn test_replay_under_new_nonce_does_not_recover_signer() {
        let verifier = SignatureVerifierService::new(ROUTER);
        let wallet = Secp256k1KeyPair::generate();
        let signature = sign(&wallet, &verifier, &deposit_batch(0));

        let replayed = verifier.get_account_from_signature(&deposit_batch(1), &signature);
        assert_ne!(replayed.ok(), Some(wallet.address()));
    }

    #[test]
    fn test_signature_bound_to_verifying_contract() {
        let router = SignatureVerifierService::new(ROUTER);
        let other = SignatureVerifierService::new([0x77; 20]);
        let wallet = Secp256k1KeyPair::generate();
        let data = deposit_batch(0);

        let signature = sign(&wallet, &router, &data);
        let recovered = other.get_account_from_signature(&data, &signature);
        assert_ne!(recovered.ok(), Some(wallet.address()));
    }

    #[test]
    fn test_json_payload_verifies() {
        let verifier = SignatureVerifierService::new(ROUTER);
        let wallet = Secp256k1KeyPair::generate();
        let data = deposit_batch(3);
        let signature = sign(&wallet, &verifier, &data);

        let wire = serde_json::to_string(&data).unwrap();
        assert!(wire.contains("\"actionType\":1"));
        let received: TransactionData = serde_json::from_str(&wire).unwrap();

        assert_eq!(
            verifier.get_account_from_signature(&received, &signature).unwrap(),
            wallet.address()
        );
    }

    #[test]
    fn test_approval_flow() {
        let verifier = SignatureVerifierService::new(ROUTER);
        let wallet = Secp256k1KeyPair::generate();
        let approval = Approval {
            token: DAI,
            amount: U256::exp10(21),
            amount_type: AmountType::Absolute,
            nonce: U256::from(9),
        };

        let signature = wallet
            .sign_prehash(&verifier.hash_approval(&approval))
            .unwrap();
        assert_eq!(
            verifier
                .get_account_from_approval_signature(&approval, signature.as_bytes())
                .unwrap(),
            wallet.address()
        );

        // An approval signature is not a transaction signature
        let as_batch = verifier.get_account_from_signature(&deposit_batch(9), signature.as_bytes());
        assert_ne!(as_batch.ok(), Some(wallet.address()));
    }

    #[test]
    fn test_garbage_signature_is_invalid() {
        let verifier = SignatureVerifierService::new(ROUTER);
        assert!(matches!(
            verifier.get_account_from_signature(&deposit_batch(0), &[0xFF; 65]),
            Err(RegistryError::InvalidSignature(_))
        ));
        assert!(matches!(
            verifier.get_account_from_approval_signature(
                &Approval {
                    token: DAI,
                    amount: U256::one(),
                    amount_type: AmountType::None,
                    nonce: U256::zero(),
                },
                &[0x01; 10],
            ),
            Err(RegistryError::InvalidSignature(_))
        ));
    }
}
