fn main() -> anyhow::Result<()> {
    particle_backdrop::run()
}
