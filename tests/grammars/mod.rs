#![allow(dead_code)]

use cfg_ll1::Grammar;

/// Expression grammar without left recursion.
///
/// ```text
/// 0 E -> T X
/// 1 X -> + T X
/// 2 X -> ε
/// 3 T -> F Y
/// 4 Y -> * F Y
/// 5 Y -> ε
/// 6 F -> ( E )
/// 7 F -> i
/// ```
pub fn expression() -> Grammar {
    let mut bnf = Grammar::builder();
    bnf.rule("E")
        .rhs(["T", "X"])
        .rule("X")
        .rhs(["+", "T", "X"])
        .epsilon()
        .rule("T")
        .rhs(["F", "Y"])
        .rule("Y")
        .rhs(["*", "F", "Y"])
        .epsilon()
        .rule("F")
        .rhs(["(", "E", ")"])
        .rhs(["i"]);
    bnf.finalize("E").unwrap()
}

/// Balanced parentheses, `S -> ( S ) S | ε`.
pub fn balanced() -> Grammar {
    let mut bnf = Grammar::builder();
    bnf.rule("S").rhs(["(", "S", ")", "S"]).epsilon();
    bnf.finalize("S").unwrap()
}

/// Statements with multi-character terminals. The dangling `else` makes
/// `else_part` conflict on `else`.
///
/// ```text
/// 0 stmt  -> if expr then stmt else_part
/// 1 stmt  -> id := expr
/// 2 else_part -> else stmt
/// 3 else_part -> ε
/// 4 expr  -> id
/// 5 expr  -> num
/// ```
pub fn statements() -> Grammar {
    let mut bnf = Grammar::builder();
    bnf.rule("stmt")
        .rhs(["if", "expr", "then", "stmt", "else_part"])
        .rhs(["id", ":=", "expr"])
        .rule("else_part")
        .rhs(["else", "stmt"])
        .epsilon()
        .rule("expr")
        .rhs(["id"])
        .rhs(["num"]);
    bnf.finalize("stmt").unwrap()
}

/// `A -> a | a B`, `B -> b`: both alternatives of `A` begin with `a`.
pub fn common_prefix() -> Grammar {
    let mut bnf = Grammar::builder();
    bnf.rule("A").rhs(["a"]).rhs(["a", "B"]).rule("B").rhs(["b"]);
    bnf.finalize("A").unwrap()
}

/// `S -> b | S a`: left recursive.
pub fn left_recursive() -> Grammar {
    let mut bnf = Grammar::builder();
    bnf.rule("S").rhs(["b"]).rhs(["S", "a"]);
    bnf.finalize("S").unwrap()
}

/// `S -> A a b | b`, `A -> a | ε`: FIRST/FOLLOW conflict on `a`.
pub fn nullable_conflict() -> Grammar {
    let mut bnf = Grammar::builder();
    bnf.rule("S")
        .rhs(["A", "a", "b"])
        .rhs(["b"])
        .rule("A")
        .rhs(["a"])
        .epsilon();
    bnf.finalize("S").unwrap()
}
