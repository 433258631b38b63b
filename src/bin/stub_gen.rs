use pyo3_stub_gen::Result;

fn main() -> Result<()> {
    let stub = pyo3_concept_chart::stub_info()?;
    stub.generate()?;
    Ok(())
}
