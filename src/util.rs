// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

#[cfg(test)]
pub(crate) mod tests {
    use std::fmt;

    pub(crate) struct DebugAsDisplay<T>(pub T);

    impl<T: fmt::Display> fmt::Debug for DebugAsDisplay<T> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0.fmt(f)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn test_op_helper<
        T: Clone + PartialEq + fmt::Display,
        OpEqMove: Fn(&mut T, T),
        OpEqRef: Fn(&mut T, &T),
        OpRefRef: Fn(&T, &T) -> T,
        OpMoveRef: Fn(T, &T) -> T,
        OpRefMove: Fn(&T, T) -> T,
        OpMoveMove: Fn(T, T) -> T,
    >(
        l: T,
        r: T,
        expected: &T,
        op_eq_move: OpEqMove,
        op_eq_ref: OpEqRef,
        op_ref_ref: OpRefRef,
        op_move_ref: OpMoveRef,
        op_ref_move: OpRefMove,
        op_move_move: OpMoveMove,
    ) {
        let expected = DebugAsDisplay(expected);
        let check = |result: T| assert_eq!(DebugAsDisplay(&result), expected);
        let mut eq_move_result = l.clone();
        op_eq_move(&mut eq_move_result, r.clone());
        check(eq_move_result);
        let mut eq_ref_result = l.clone();
        op_eq_ref(&mut eq_ref_result, &r);
        check(eq_ref_result);
        check(op_ref_ref(&l, &r));
        check(op_ref_move(&l, r.clone()));
        check(op_move_ref(l.clone(), &r));
        check(op_move_move(l, r));
    }

    impl<T: PartialEq> PartialEq for DebugAsDisplay<T> {
        fn eq(&self, rhs: &Self) -> bool {
            self.0 == rhs.0
        }
    }
}
