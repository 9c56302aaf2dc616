use core::any::type_name;

use rancor::fail;

use crate::{error::UnsupportedPointer, Engine, Shape, Transfer};

// Raw pointers carry neither ownership nor a length, so there is nothing sound
// to write for them or to decode into them.

impl<T: ?Sized> Transfer for *const T {
    const SHAPE: Shape = Shape::Pointer;

    fn transfer<E: Engine + ?Sized>(
        &mut self,
        _: &mut E,
    ) -> Result<(), E::Error> {
        fail!(UnsupportedPointer {
            type_name: type_name::<Self>(),
        })
    }
}

impl<T: ?Sized> Transfer for *mut T {
    const SHAPE: Shape = Shape::Pointer;

    fn transfer<E: Engine + ?Sized>(
        &mut self,
        _: &mut E,
    ) -> Result<(), E::Error> {
        fail!(UnsupportedPointer {
            type_name: type_name::<Self>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use core::ptr;

    use rancor::Error;

    use crate::{
        alloc::{string::ToString, vec::Vec},
        from_bytes_into, to_bytes, to_bytes_in,
    };

    #[test]
    fn raw_pointers_are_rejected() {
        let mut value = 5u32;
        let mut pointer: *mut u32 = &mut value;
        let err = to_bytes::<_, Error>(&mut pointer).unwrap_err();
        assert!(err.to_string().contains("raw pointer `*mut u32`"));

        let mut pointer = ptr::null::<u8>();
        assert!(to_bytes::<_, Error>(&mut pointer).is_err());
        assert!(from_bytes_into::<_, Error>(&mut pointer, &[0; 8]).is_err());
        assert!(pointer.is_null());
    }

    #[test]
    fn rejected_before_writing() {
        let mut pair = (7u8, ptr::null_mut::<u8>());
        let mut bytes = Vec::new();
        assert!(to_bytes_in::<_, _, Error>(&mut pair.1, &mut bytes).is_err());
        assert!(bytes.is_empty());
    }
}
