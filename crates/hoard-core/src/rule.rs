//! Arithmetic modifier rules.
//!
//! A rule is a compact string like `+4`, `*10` or `**2`: an operator
//! followed by a decimal operand, nothing else. Rules are parsed once into
//! a [`ModifierRule`] and evaluated against an item's current value.

use std::fmt;

/// The closed set of rule operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierOp {
    /// `+N`: add the operand.
    Add,
    /// `-N`: subtract the operand.
    Sub,
    /// `*N`: multiply by the operand.
    Mul,
    /// `/N`: divide by the operand.
    Div,
    /// `**N`: raise to the operand's power.
    Pow,
    /// `%N`: remainder of division by the operand.
    Mod,
}

impl fmt::Display for ModifierOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Pow => write!(f, "**"),
            Self::Mod => write!(f, "%"),
        }
    }
}

/// A parsed arithmetic rule: operator plus operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifierRule {
    /// The operator to apply.
    pub op: ModifierOp,
    /// The numeric operand.
    pub operand: f64,
}

impl ModifierRule {
    /// Parse a rule string.
    ///
    /// The whole string must match: an operator (`**` before `*`), then
    /// one or more decimal digits. A zero operand does not parse; a rule
    /// that would be a no-op (or a division by zero) is treated as not a
    /// rule at all, and falls through to the other modifier value kinds.
    pub fn parse(rule: &str) -> Option<Self> {
        let (op, rest) = if let Some(rest) = rule.strip_prefix("**") {
            (ModifierOp::Pow, rest)
        } else if let Some(rest) = rule.strip_prefix('+') {
            (ModifierOp::Add, rest)
        } else if let Some(rest) = rule.strip_prefix('-') {
            (ModifierOp::Sub, rest)
        } else if let Some(rest) = rule.strip_prefix('*') {
            (ModifierOp::Mul, rest)
        } else if let Some(rest) = rule.strip_prefix('/') {
            (ModifierOp::Div, rest)
        } else if let Some(rest) = rule.strip_prefix('%') {
            (ModifierOp::Mod, rest)
        } else {
            return None;
        };

        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let operand: u32 = rest.parse().ok()?;
        if operand == 0 {
            return None;
        }

        Some(Self {
            op,
            operand: f64::from(operand),
        })
    }

    /// Apply the rule to a base value. Results are not clamped; a rule may
    /// take a value negative.
    pub fn evaluate(&self, base: f64) -> f64 {
        match self.op {
            ModifierOp::Add => base + self.operand,
            ModifierOp::Sub => base - self.operand,
            ModifierOp::Mul => base * self.operand,
            ModifierOp::Div => base / self.operand,
            ModifierOp::Pow => base.powf(self.operand),
            ModifierOp::Mod => base % self.operand,
        }
    }

    /// Parse and evaluate in one step, returning `0.0` when the string is
    /// not a valid rule.
    pub fn apply(base: f64, rule: &str) -> f64 {
        Self::parse(rule).map_or(0.0, |r| r.evaluate(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operator() {
        for (rule, op) in [
            ("+1", ModifierOp::Add),
            ("-1", ModifierOp::Sub),
            ("*1", ModifierOp::Mul),
            ("/1", ModifierOp::Div),
            ("**1", ModifierOp::Pow),
            ("%1", ModifierOp::Mod),
        ] {
            let parsed = ModifierRule::parse(rule).unwrap();
            assert_eq!(parsed.op, op, "{rule}");
            assert_eq!(parsed.operand, 1.0, "{rule}");
        }
    }

    #[test]
    fn rejects_non_rules() {
        assert!(ModifierRule::parse("abc").is_none());
        assert!(ModifierRule::parse("4-10").is_none());
        assert!(ModifierRule::parse("+1x").is_none());
        assert!(ModifierRule::parse("+").is_none());
        assert!(ModifierRule::parse("1+1").is_none());
        assert!(ModifierRule::parse("").is_none());
    }

    #[test]
    fn rejects_zero_operand() {
        assert!(ModifierRule::parse("+0").is_none());
        assert!(ModifierRule::parse("*0").is_none());
    }

    #[test]
    fn evaluates_arithmetic() {
        assert_eq!(ModifierRule::apply(1.0, "+1"), 2.0);
        assert_eq!(ModifierRule::apply(1.0, "+20"), 21.0);
        assert_eq!(ModifierRule::apply(1.0, "-1"), 0.0);
        assert_eq!(ModifierRule::apply(1.0, "-20"), -19.0);
        assert_eq!(ModifierRule::apply(1.0, "*10"), 10.0);
        assert_eq!(ModifierRule::apply(1.0, "/10"), 0.1);
        assert_eq!(ModifierRule::apply(1.0, "**2"), 1.0);
        assert_eq!(ModifierRule::apply(2.0, "**20"), 2f64.powi(20));
        assert_eq!(ModifierRule::apply(7.0, "%3"), 1.0);
    }

    #[test]
    fn invalid_rule_evaluates_to_zero() {
        assert_eq!(ModifierRule::apply(5.0, "nope"), 0.0);
    }
}
