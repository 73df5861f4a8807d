use assistant_lang::parser::{if_condition, is_else};
use assistant_lang::SyntaxResult;

use crate::control::{Branch, BranchKind, Section};
use crate::eval::evaluate_str;
use crate::host::CommandHost;
use crate::state::Environment;

/// Choose between an `if` section and the section that follows it.
///
/// `skip_next` is set whenever `next` is an `else`, whichever branch is
/// taken, so the walker can step over it. Only the logical half of the
/// condition is used.
pub fn resolve_condition<'s, B>(
    env: &Environment,
    host: &dyn CommandHost,
    if_section: &'s Section<B>,
    next: Option<&'s Section<B>>,
) -> SyntaxResult<Branch<'s, B>> {
    let else_section = next.filter(|section| is_else(&section.header));
    let skip_next = else_section.is_some();

    let condition = if_condition(&if_section.header)?;
    let taken = evaluate_str(env, host, condition)?.logical;
    tracing::debug!(condition, taken, skip_next, "resolved condition");

    let branch = if taken {
        Branch {
            kind: BranchKind::If,
            skip_next,
            body: Some(&if_section.body),
        }
    } else {
        Branch {
            kind: BranchKind::Else,
            skip_next,
            body: else_section.map(|section| &section.body),
        }
    };
    Ok(branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::CommandOutcome;
    use crate::test_support::mock::MockHost;
    use assistant_lang::SyntaxError;

    fn env() -> Environment {
        let mut env = Environment::new();
        env.set("yes", "1");
        env.set("no", "");
        env
    }

    #[test]
    fn true_condition_with_else() {
        let host = MockHost::new();
        let if_section = Section::new("if $yes", "then");
        let else_section = Section::new("else", "otherwise");
        let branch = resolve_condition(&env(), &host, &if_section, Some(&else_section)).unwrap();
        assert_eq!(branch.kind, BranchKind::If);
        assert_eq!(branch.kind.index(), 0);
        assert!(branch.skip_next);
        assert_eq!(branch.body, Some(&"then"));
    }

    #[test]
    fn false_condition_with_else() {
        let host = MockHost::new();
        let if_section = Section::new("if $no", "then");
        let else_section = Section::new("else", "otherwise");
        let branch = resolve_condition(&env(), &host, &if_section, Some(&else_section)).unwrap();
        assert_eq!(branch.kind.index(), 1);
        assert!(branch.skip_next);
        assert_eq!(branch.body, Some(&"otherwise"));
    }

    #[test]
    fn false_condition_without_else() {
        let host = MockHost::new();
        let if_section = Section::new("if $no", "then");
        let branch = resolve_condition(&env(), &host, &if_section, None).unwrap();
        assert_eq!(
            branch,
            Branch {
                kind: BranchKind::Else,
                skip_next: false,
                body: None,
            }
        );
    }

    #[test]
    fn following_section_that_is_not_else_is_ignored() {
        let host = MockHost::new();
        let if_section = Section::new("if $no", "then");
        let other = Section::new("run", "unrelated");
        let branch = resolve_condition(&env(), &host, &if_section, Some(&other)).unwrap();
        assert!(!branch.skip_next);
        assert_eq!(branch.body, None);

        let if_section = Section::new("if $yes", "then");
        let branch = resolve_condition(&env(), &host, &if_section, Some(&other)).unwrap();
        assert!(!branch.skip_next);
        assert_eq!(branch.body, Some(&"then"));
    }

    #[test]
    fn command_condition_uses_exit_status() {
        let host = MockHost::new()
            .with_outcome("test -d src", CommandOutcome::success(""))
            .with_outcome("test -d nope", CommandOutcome::failure(1, ""));
        let else_section = Section::new("else", 2);

        let if_section = Section::new("if $(test -d src)", 1);
        let branch = resolve_condition(&env(), &host, &if_section, Some(&else_section)).unwrap();
        assert_eq!(branch.body, Some(&1));

        let if_section = Section::new("if not $(test -d nope)", 1);
        let branch = resolve_condition(&env(), &host, &if_section, Some(&else_section)).unwrap();
        assert_eq!(branch.body, Some(&1));
    }

    #[test]
    fn not_an_if_header() {
        let host = MockHost::new();
        let if_section = Section::new("when $yes", ());
        assert_eq!(
            resolve_condition(&env(), &host, &if_section, None),
            Err(SyntaxError::IfHeader("when $yes".into()))
        );
    }

    #[test]
    fn malformed_condition_propagates() {
        let host = MockHost::new();
        let if_section = Section::new("if yes", ());
        assert_eq!(
            resolve_condition(&env(), &host, &if_section, None),
            Err(SyntaxError::Expression("yes".into()))
        );
    }
}
