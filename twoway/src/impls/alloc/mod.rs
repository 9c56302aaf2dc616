mod boxed;
mod collections;
mod string;
mod vec;
