use std::sync::Arc;

use fanout_relay::broadcast::Queue;
use futures_util::StreamExt;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_see_every_value_in_order() {
    let queue = Queue::new();

    let readers: Vec<_> = (0..10)
        .map(|_| {
            let mut reader = queue.subscribe();
            tokio::spawn(async move {
                let mut seen = Vec::new();
                while let Some(value) = reader.read().await {
                    seen.push(value);
                }
                // End of stream is sticky.
                assert_eq!(reader.read().await, None);
                seen
            })
        })
        .collect();

    for i in 0..10 {
        queue.publish(i).unwrap();
    }
    queue.close();

    for reader in readers {
        let seen = reader.await.unwrap();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_producers_single_order() {
    let queue = Arc::new(Queue::new());
    let readers: Vec<_> = (0..4).map(|_| queue.subscribe()).collect();

    let producers: Vec<_> = (0..4u32)
        .map(|p| {
            let queue = Arc::clone(&queue);
            tokio::spawn(async move {
                for i in 0..250u32 {
                    queue.publish(p * 1000 + i).unwrap();
                    if i % 50 == 0 {
                        tokio::task::yield_now().await;
                    }
                }
            })
        })
        .collect();

    let consumers: Vec<_> = readers
        .into_iter()
        .map(|reader| tokio::spawn(reader.into_stream().collect::<Vec<u32>>()))
        .collect();

    for producer in producers {
        producer.await.unwrap();
    }
    queue.close();

    let mut orders = Vec::new();
    for consumer in consumers {
        orders.push(consumer.await.unwrap());
    }

    assert_eq!(orders[0].len(), 1000);
    for order in &orders[1..] {
        assert_eq!(order, &orders[0]);
    }

    // Each producer's own values stay in the order it published them.
    for p in 0..4u32 {
        let own: Vec<_> = orders[0].iter().filter(|v| **v / 1000 == p).collect();
        assert!(own.windows(2).all(|w| w[0] < w[1]));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_joining_mid_stream() {
    let queue = Arc::new(Queue::new());
    let mut handles = Vec::new();

    for i in 0..20u32 {
        let mut reader = queue.subscribe();
        let start = i;
        handles.push(tokio::spawn(async move {
            let mut expected = start;
            while let Some(value) = reader.read().await {
                assert_eq!(value, expected);
                expected += 1;
            }
            expected
        }));
        queue.publish(i).unwrap();
    }
    queue.close();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 20);
    }
}
