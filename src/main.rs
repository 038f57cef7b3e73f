use roshambo::lobby::Lobby;

fn main() -> anyhow::Result<()> {
    roshambo::log();
    Lobby::new().run()
}
