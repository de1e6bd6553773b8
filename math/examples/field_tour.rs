use gf2n::prelude::*;

fn main() -> Result<(), FieldError> {
    let field = StandardField::Toy.parameters::<u8>()?;
    let n = field.degree();

    println!("There are {} elements in GF(2^{n}).", field.cardinality());
    for value in field.elements() {
        let element = field.element(value)?;
        let degree = degree(value).map_or("-".to_string(), |d| d.to_string());
        println!("{element:#04x}  degree {degree:>1}  {element}");
    }

    let half = field.cardinality() / 2;
    let pairs: Vec<(u8, u8)> = (0..half).map(|a| (a, a + half)).collect();

    println!("\nAddition:");
    for &(a, b) in &pairs {
        println!("{a:02x} + {b:02x} = {:02x}", field.add(a, b));
    }

    println!("\nUnreduced products and their Blakely residues:");
    for &(a, b) in &pairs {
        let product = field.multiply_unreduced(a, b);
        let residue = field.reduce_blakely(product);
        println!("{a:02x} x {b:02x} = {product:02x}, residue {residue:02x}");
    }

    println!("\nInterleaved modular products:");
    for &(a, b) in &pairs {
        let product = field.multiply_reduce_interleaved(a, b);
        println!("{a:02x} x {b:02x} = {product:02x} mod {:02x}", field.modulus());
    }

    println!("\nLong division by the modulus:");
    for c in pairs.iter().map(|&(a, b)| field.multiply_unreduced(a, b)).chain([0xa1]) {
        let DivRem { quotient, remainder } = divide(c, field.modulus())?;
        println!("{c:02x} = {quotient:02x} * {:02x} + {remainder:02x}", field.modulus());
    }

    println!("\nInverses:");
    for value in field.elements() {
        match field.multiplicative_inverse(value) {
            Ok(inverse) => println!("{value:02x}^-1 = {inverse:02x}"),
            Err(err) => println!("{value:02x}^-1: {err}"),
        }
    }

    Ok(())
}
