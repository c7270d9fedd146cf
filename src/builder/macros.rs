//! Macros for declaring automata inline.

/// Declare an automaton with [`DfaBuilder`](crate::builder::DfaBuilder).
///
/// Expands to builder calls and evaluates to `Result<Dfa, BuildError>`.
/// Every section except `states` is optional, but sections must appear in
/// the order shown.
///
/// # Example
///
/// ```
/// use dfa_notation::dfa;
///
/// let dfa = dfa! {
///     states: [q0, q1]
///     alphabet: ['0', '1']
///     start: q0
///     accept: [q1]
///     transitions: {
///         q0, '0' => q0;
///         q0, '1' => q1;
///         q1, '0' => q1;
///         q1, '1' => q1;
///     }
/// }
/// .unwrap();
///
/// assert!(dfa.accepts("01"));
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: [$($state:ident),* $(,)?]
        $(alphabet: [$($symbol:literal),* $(,)?])?
        $(start: $start:ident)?
        $(accept: [$($accept:ident),* $(,)?])?
        $(transitions: {
            $($from:ident, $sym:literal => $to:ident);* $(;)?
        })?
    ) => {{
        $crate::builder::DfaBuilder::new()
            $(.state(stringify!($state)))*
            $($(.symbol($symbol))*)?
            $(.start(stringify!($start)))?
            $($(.accepting(stringify!($accept)))*)?
            $($(.transition(stringify!($from), $sym, stringify!($to)))*)?
            .build()
    }};
}
