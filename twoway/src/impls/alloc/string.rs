use core::mem;

use rancor::Source;

use crate::{
    alloc::string::String,
    engine::strategy::{transfer_len, transfer_resizable},
    Direction, Engine, Shape, Transfer,
};

// Strings travel as their UTF-8 bytes and are validated after decoding.
impl Transfer for String {
    const SHAPE: Shape = Shape::ResizableSequence;

    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        match engine.direction() {
            Direction::Encode => {
                transfer_len(engine, self.len())?;
                for mut byte in self.as_bytes().iter().copied() {
                    byte.transfer(engine)?;
                }
                Ok(())
            }
            Direction::Decode => {
                let mut bytes = mem::take(self).into_bytes();
                let result = transfer_resizable(&mut bytes, engine);
                match String::from_utf8(bytes) {
                    Ok(string) => {
                        *self = string;
                        result
                    }
                    Err(e) => {
                        result?;
                        Err(<E::Error as Source>::new(e.utf8_error()))
                    }
                }
            }
        }
    }
}
