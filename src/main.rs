use core::fmt::Display;
use universal_set::{Error, Universe, Vector};

const N: usize = 10;

fn print_size_and_elems<T: Display>(v: &Vector<'_, T, N>) {
    println!("Size: {}", v.count());
    for e in v {
        print!("{e}, ");
    }
    println!();
}

fn outcome(b: bool, yes: &'static str, no: &'static str) -> &'static str {
    if b {
        yes
    } else {
        no
    }
}

fn main() -> Result<(), Error> {
    let us = Universe::new(["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"]);

    let mut v1 = us.new_vector();
    let mut v2 = us.new_vector();
    for i in 0..us.size() {
        if i & 1 == 1 {
            v1.insert(i)?;
        } else {
            v2.insert(i)?;
        }
    }
    let mut v3 = v2.clone();

    println!("{}", outcome(v1.is_member(1), "Found", "Not found"));
    println!("{}", outcome(v1.is_member(2), "Found", "Not found"));
    println!("{}", outcome(v2.remove(8), "Removed", "Not removed"));
    println!("{}", outcome(v2.remove(9), "Removed", "Not removed"));
    for i in 1..=4 {
        println!("{}", outcome(v3.insert(i)?.1, "Inserted", "Not inserted"));
    }

    let v4 = v1.union(&v3)?;
    let v5 = v3.difference(&v2)?;
    let v6 = v3.intersection(&v5)?;
    let v7 = v5.symmetric_difference(&v3)?;

    print_size_and_elems(&v4);
    print_size_and_elems(&v5);
    print_size_and_elems(&v6);
    print_size_and_elems(&v7);

    let it1 = v7.elem_iterator(1);
    let it2 = v7.elem_iterator(2);
    println!("{}", it1.element().unwrap_or(&"end"));
    println!("{}", it2.element().unwrap_or(&"end"));
    println!("{}", us[2]);
    Ok(())
}
