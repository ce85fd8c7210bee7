use std::collections::HashMap;

use crate::{
    ast::expressions::Expr,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::*, parser::Parser};

/// How tightly an operator holds on to its operands. Higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Default)]
pub struct BindingPower(pub u8);

impl BindingPower {
    /// Looser than every registered operator. Tokens without an infix entry
    /// (`EOF`, `)`, `,`) are treated as having this power, which ends the loop.
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const ADDITIVE: BindingPower = BindingPower(3);
    pub const SHIFT: BindingPower = BindingPower(3);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(4);
    pub const PREFIX: BindingPower = BindingPower(6);
    pub const POSTFIX: BindingPower = BindingPower(7);
    pub const CALL: BindingPower = BindingPower(8);

    /// One step looser. Parsing a right operand at `bp.weaker()` lets an
    /// operator of equal power bind again, which groups chains to the right.
    pub fn weaker(self) -> BindingPower {
        BindingPower(self.0.saturating_sub(1))
    }
}

pub type NUDHandler = fn(&mut Parser, Token) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, Token) -> Result<Expr, Error>;

// Lookup tables inside the registry, so the parser only needs one reference
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// Frozen parselet registry.
///
/// Built once through [`LookupsBuilder`] and only read afterwards, so a
/// single instance can back any number of parses.
#[derive(Clone, Default)]
pub struct Lookups {
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    prefix_bp_lookup: BPLookup,
    infix_bp_lookup: BPLookup,
}

impl Lookups {
    pub fn builder() -> LookupsBuilder {
        LookupsBuilder::default()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Binding power a prefix parselet for `kind` parses its operand at.
    pub fn prefix_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.prefix_bp_lookup.get(&kind).copied().unwrap_or_default()
    }

    /// Binding power of `kind` in infix position, `DEFAULT` if unregistered.
    pub fn infix_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.infix_bp_lookup.get(&kind).copied().unwrap_or_default()
    }
}

/// Registers parselets and their binding powers, then freezes them with
/// [`LookupsBuilder::build`].
///
/// Registering the same kind twice in the same position replaces the
/// earlier entry.
#[derive(Clone, Default)]
pub struct LookupsBuilder {
    lookups: Lookups,
}

impl LookupsBuilder {
    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(mut self, kind: TokenKind, binding_power: BindingPower, nud_fn: NUDHandler) -> Self {
        self.lookups.prefix_bp_lookup.insert(kind, binding_power);
        self.lookups.nud_lookup.insert(kind, nud_fn);
        self
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// The handler and its binding power are always stored together.
    pub fn led(mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) -> Self {
        self.lookups.infix_bp_lookup.insert(kind, binding_power);
        self.lookups.led_lookup.insert(kind, led_fn);
        self
    }

    /// Prefix unary operators, e.g. `-x`.
    pub fn prefix(self, binding_power: BindingPower, kinds: &[TokenKind]) -> Self {
        kinds
            .iter()
            .fold(self, |builder, kind| builder.nud(*kind, binding_power, parse_prefix_expr))
    }

    /// Postfix unary operators, e.g. `x++`.
    pub fn postfix(self, binding_power: BindingPower, kinds: &[TokenKind]) -> Self {
        kinds
            .iter()
            .fold(self, |builder, kind| builder.led(*kind, binding_power, parse_postfix_expr))
    }

    /// Left-associative binary operators: `a - b - c` is `(- (- a b) c)`.
    pub fn left_assoc(self, binding_power: BindingPower, kinds: &[TokenKind]) -> Self {
        kinds
            .iter()
            .fold(self, |builder, kind| builder.led(*kind, binding_power, parse_binary_expr))
    }

    /// Right-associative binary operators: `a << b << c` is `(<< a (<< b c))`.
    pub fn right_assoc(self, binding_power: BindingPower, kinds: &[TokenKind]) -> Self {
        kinds.iter().fold(self, |builder, kind| {
            builder.led(*kind, binding_power, parse_right_assoc_binary_expr)
        })
    }

    /// Call syntax `f(a, b)`, with `kind` as the opening delimiter.
    pub fn call(self, kind: TokenKind, binding_power: BindingPower) -> Self {
        self.led(kind, binding_power, parse_call_expr)
    }

    /// Parenthesised sub-expression, with `kind` as the opening delimiter.
    pub fn grouping(self, kind: TokenKind) -> Self {
        self.nud(kind, BindingPower::DEFAULT, parse_grouping_expr)
    }

    /// A token that is a complete expression by itself.
    pub fn atom(self, kind: TokenKind) -> Self {
        self.nud(kind, BindingPower::DEFAULT, parse_name_expr)
    }

    pub fn build(self) -> Lookups {
        self.lookups
    }
}

/// The reference operator table.
pub fn create_token_lookups() -> Lookups {
    Lookups::builder()
        // Literals and symbols
        .grouping(TokenKind::OpenParen)
        .atom(TokenKind::Identifier)
        .call(TokenKind::OpenParen, BindingPower::CALL)
        // Unary
        .prefix(
            BindingPower::PREFIX,
            &[
                TokenKind::Plus,
                TokenKind::Dash,
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
            ],
        )
        .postfix(BindingPower::POSTFIX, &[TokenKind::PlusPlus, TokenKind::MinusMinus])
        // Additive and multiplicative
        .left_assoc(BindingPower::ADDITIVE, &[TokenKind::Plus, TokenKind::Dash])
        .left_assoc(
            BindingPower::MULTIPLICATIVE,
            &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
        )
        // Shares the additive level and groups to the right
        .right_assoc(BindingPower::SHIFT, &[TokenKind::ShiftLeft])
        .build()
}
