use crate::Extract;

/// The outcome of applying a [`Prepared`](crate::Prepared) chain to one input.
///
/// An `Applied` carries the same terminal operations as a
/// [`Chain`](crate::Chain) but cannot be extended with further steps:
/// results are consumed, not chained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied<T> {
    value: Option<T>,
}

impl<T> Applied<T> {
    pub(crate) fn new(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> Extract for Applied<T> {
    type Value = T;

    fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> From<Applied<T>> for Option<T> {
    fn from(applied: Applied<T>) -> Self {
        applied.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_reads_the_wrapped_outcome() {
        let present = Applied::new(Some("done"));
        assert_eq!(present.get(), Some(&"done"));
        assert_eq!(present.into_option(), Some("done"));

        let absent = Applied::<&str>::new(None);
        assert_eq!(absent.get(), None);
        assert_eq!(absent.get_or("fallback"), "fallback");
    }

    #[test]
    fn converts_into_option() {
        let maybe: Option<i32> = Applied::new(Some(3)).into();
        assert_eq!(maybe, Some(3));
    }
}
