#[derive(Debug)]
pub struct GetKeyUseCaseInput {
    pub key: String,
}

#[derive(Debug)]
pub struct GetKeyUseCaseOutput {
    pub node_id: String,
    pub value: Option<String>,
}
