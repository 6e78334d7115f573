use dnsprobe_application::use_cases::LookupUseCase;
use dnsprobe_domain::Config;
use dnsprobe_infrastructure::id::RandomIdGenerator;
use dnsprobe_infrastructure::transport::UdpTransport;
use std::sync::Arc;

pub fn build_lookup(config: &Config) -> anyhow::Result<LookupUseCase> {
    let transport = Arc::new(UdpTransport::new(config.server_addr()?, config.timeout()));
    let id_generator = Arc::new(RandomIdGenerator::new());
    Ok(LookupUseCase::new(transport, id_generator))
}
