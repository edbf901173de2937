//! Blank-marker interleaving for class bodies.

use crate::builder::Member;

/// Insert one [`Member::Nop`] between every pair of adjacent members.
///
/// No marker leads or trails the sequence. Apply once per class: a second
/// pass would double the spacing.
pub fn separate_by_blank(members: Vec<Member>) -> Vec<Member> {
    let mut separated = Vec::with_capacity(members.len() * 2);

    for member in members {
        if !separated.is_empty() {
            separated.push(Member::Nop);
        }
        separated.push(member);
    }

    separated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{MethodSpec, PropertySpec, TypeRef};

    fn methods(n: usize) -> Vec<Member> {
        (0..n)
            .map(|i| MethodSpec::new(format!("m{}", i)).into())
            .collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(separate_by_blank(Vec::new()).is_empty());

        let single = separate_by_blank(methods(1));
        assert_eq!(single.len(), 1);
        assert!(!single[0].is_nop());
    }

    #[test]
    fn test_markers_between_every_pair() {
        for n in 2..6 {
            let separated = separate_by_blank(methods(n));

            assert_eq!(separated.len(), 2 * n - 1);
            assert_eq!(separated.iter().filter(|m| m.is_nop()).count(), n - 1);
            assert!(!separated.first().unwrap().is_nop());
            assert!(!separated.last().unwrap().is_nop());
            for (i, member) in separated.iter().enumerate() {
                assert_eq!(member.is_nop(), i % 2 == 1);
            }
        }
    }

    #[test]
    fn test_relative_order_kept() {
        let members = vec![
            PropertySpec::new("a", TypeRef::string()).into(),
            MethodSpec::new("b").into(),
        ];
        let separated = separate_by_blank(members);

        assert_eq!(separated[0].as_property().map(|p| p.name.as_str()), Some("a"));
        assert!(separated[1].is_nop());
        assert_eq!(separated[2].as_method().map(|m| m.name.as_str()), Some("b"));
    }
}
