use crate::tracker::structs::shard_table::ShardTable;

impl ShardTable {
    /// Files whose swarm lives on the shard at `port`.
    pub fn files_on(&self, port: u16) -> Vec<String> {
        self.files
            .iter()
            .filter(|(_, shard_port)| **shard_port == port)
            .map(|(file_name, _)| file_name.clone())
            .collect()
    }
}
