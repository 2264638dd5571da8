/// Writes the elements of `seq` as `[a, b, c]`, the `Display` form shared
/// by both container types.
pub(crate) fn print_slice<A>(f: &mut core::fmt::Formatter<'_>, seq: &[A]) -> core::fmt::Result
where
    A: core::fmt::Display,
{
    f.write_str("[")?;
    let mut first = true;
    for x in seq {
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        write!(f, "{x}")?;
    }
    f.write_str("]")
}
