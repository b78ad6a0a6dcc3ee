pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

/// Succeeds when `index` addresses an existing element, i.e. `index < size`.
#[inline]
pub fn verify_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        index_out_of_range(index, size)
    }
}

/// Succeeds when `index` is a valid insertion point, i.e. `index <= size`.
#[inline]
pub fn verify_position(index: usize, size: usize) -> Result<()> {
    if index <= size {
        Ok(())
    } else {
        index_out_of_range(index, size)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn index_out_of_range(index: usize, size: usize) -> Result<()> {
    Err(crate::error::Error::index_out_of_range(index, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn checked(batch_size: usize) -> Result<usize> {
        verify_arg!(batch_size, batch_size > 0);
        Ok(batch_size)
    }

    #[test]
    fn verify_arg_reports_condition() {
        assert_eq!(checked(4).unwrap(), 4);
        match checked(0).unwrap_err().into_kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "batch_size");
                assert_eq!(message, "batch_size > 0");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn index_and_position_bounds() {
        assert!(verify_index(2, 3).is_ok());
        assert!(verify_index(3, 3).is_err());
        assert!(verify_position(3, 3).is_ok());
        assert!(verify_position(4, 3).is_err());
    }
}
