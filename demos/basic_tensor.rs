//! Basic Tensor Operations
//!
//! This example walks through the core minitensor API: a dot product,
//! element access, broadcasting addition, scalar scaling, reshape, and a
//! tensor labelled for the GPU.
//!
//! Run with:
//! ```sh
//! RUST_LOG=trace cargo run --example basic_tensor
//! ```

use minitensor::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    // -----------------------------------------------------------------------
    // 1. Dot product of two vectors
    // -----------------------------------------------------------------------
    let vec1 = Tensor::new(&[3], 1.0f32, Device::Cpu);
    let vec2 = Tensor::new(&[3], 2.0f32, Device::Cpu);
    println!("Dot product: {}", vec1.dot(&vec2)?);

    // -----------------------------------------------------------------------
    // 2. A 2x3 matrix with one element overwritten
    // -----------------------------------------------------------------------
    let mut mat1 = Tensor::new(&[2, 3], 5i32, Device::Cpu);
    *mat1.at_mut(&[0, 0])? = 10;
    println!("{}", mat1);

    // -----------------------------------------------------------------------
    // 3. Broadcasting a 1x3 row across both rows
    // -----------------------------------------------------------------------
    let mat2 = mat1.add(&Tensor::new(&[1, 3], 2, Device::Cpu))?;
    println!("{}", mat2);

    // -----------------------------------------------------------------------
    // 4. Scalar multiplication
    // -----------------------------------------------------------------------
    let mut scaled = &mat2 * 3;
    println!("{}", scaled);

    // -----------------------------------------------------------------------
    // 5. Reshape to 3x2 without moving data
    // -----------------------------------------------------------------------
    scaled.reshape(&[3, 2])?;
    println!("{}", scaled);

    // -----------------------------------------------------------------------
    // 6. Device label (GPU is a placeholder; work still runs on the host)
    // -----------------------------------------------------------------------
    let on_gpu = Tensor::new(&[2, 2], 1.0f64, Device::Gpu);
    println!("{}", on_gpu);

    Ok(())
}
