use cadastro_documents::cnpj::cnpj_check_digits;
use cadastro_documents::cpf::cpf_check_digits;
use cadastro_documents::{format_cnpj, format_cpf, validate_cnpj, validate_cpf};
use proptest::prelude::*;

fn render(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

fn valid_cpf() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=9, 9).prop_map(|mut base| {
        let check = cpf_check_digits(&base).unwrap();
        base.extend(check);
        base
    })
}

fn valid_cnpj() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=9, 12)
        .prop_filter("identical digits are rejected", |base| base.iter().any(|d| *d != base[0]))
        .prop_map(|mut base| {
            let check = cnpj_check_digits(&base).unwrap();
            base.extend(check);
            base
        })
}

proptest! {
    #[test]
    fn generated_cpf_validates(cpf in valid_cpf()) {
        let bare = render(&cpf);
        prop_assert!(validate_cpf(&bare));
        prop_assert!(validate_cpf(&format_cpf(&bare).unwrap()));
    }

    #[test]
    fn mutated_cpf_check_digit_fails(cpf in valid_cpf(), pos in 9usize..11, delta in 1u8..=9) {
        let mut mutated = cpf.clone();
        mutated[pos] = (mutated[pos] + delta) % 10;
        prop_assert!(!validate_cpf(&render(&mutated)));
    }

    #[test]
    fn generated_cnpj_validates(cnpj in valid_cnpj()) {
        let bare = render(&cnpj);
        prop_assert!(validate_cnpj(&bare));
        prop_assert!(validate_cnpj(&format_cnpj(&bare).unwrap()));
    }

    #[test]
    fn mutated_cnpj_check_digit_fails(cnpj in valid_cnpj(), pos in 12usize..14, delta in 1u8..=9) {
        let mut mutated = cnpj.clone();
        mutated[pos] = (mutated[pos] + delta) % 10;
        prop_assert!(!validate_cnpj(&render(&mutated)));
    }

    #[test]
    fn wrong_length_never_validates(digits in prop::collection::vec(0u8..=9, 0..20)) {
        let s = render(&digits);
        if digits.len() != 11 {
            prop_assert!(!validate_cpf(&s));
        }
        if digits.len() != 14 {
            prop_assert!(!validate_cnpj(&s));
        }
    }

    #[test]
    fn predicates_never_panic(input in ".*") {
        let _ = validate_cpf(&input);
        let _ = validate_cnpj(&input);
        let _ = cadastro_documents::validate_email(&input);
        let _ = cadastro_documents::validate_cep(&input);
    }
}

#[test]
fn known_documents() {
    assert!(validate_cpf("529.982.247-25"));
    // Ported behavior: repeated digits satisfy the CPF checksum.
    assert!(validate_cpf("111.111.111-11"));
    assert!(validate_cnpj("11.222.333/0001-81"));
    assert!(!validate_cnpj("11.111.111/1111-11"));
}
