#[derive(Debug)]
pub struct RemoveNodeUseCaseInput {
    pub address: String,
}

#[derive(Debug)]
pub struct RemoveNodeUseCaseOutput {
    pub node_id: String,
}
