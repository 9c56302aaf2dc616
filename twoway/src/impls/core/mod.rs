mod array;
mod option;
mod primitive;
mod ptr;
mod tuple;
