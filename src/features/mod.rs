pub mod appeals;
