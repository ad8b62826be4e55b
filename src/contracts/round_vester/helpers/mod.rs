pub mod mul_div;
